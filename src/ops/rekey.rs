//! Key renaming across the canonical tree and every locale file.

use thiserror::Error;

use crate::core::{
    KeyPath, Tree, TreeError,
    tree::flat::{expand_flat, is_flat},
};

/// What to do when the target key already exists in the canonical tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Refuse to overwrite the existing key.
    #[default]
    Forbid,
    /// Overwrite it.
    Allow,
}

#[derive(Debug, Error)]
pub enum RekeyError {
    #[error("key \"{key}\" not found")]
    KeyNotFound { key: String },

    #[error("key \"{key}\" already exists (use --allow-existing to overwrite it)")]
    KeyAlreadyExists { key: String },

    #[error("old and new key are both \"{key}\"")]
    SameKey { key: String },

    #[error("cannot move \"{old}\" to \"{new}\"")]
    Collision {
        old: String,
        new: String,
        source: TreeError,
    },
}

/// A single move (or copy) of one key to another.
#[derive(Debug, Clone)]
pub struct Rekey {
    old_key: String,
    new_key: String,
    old: KeyPath,
    new: KeyPath,
    pub copy: bool,
    pub policy: DuplicatePolicy,
}

/// Outcome of applying a [`Rekey`] to one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RekeyOutcome {
    Moved,
    /// The tree does not have the old key.
    Skipped,
}

impl Rekey {
    pub fn new(old_key: &str, new_key: &str, separator: &str) -> Self {
        Self {
            old_key: old_key.to_string(),
            new_key: new_key.to_string(),
            old: KeyPath::parse(old_key, separator),
            new: KeyPath::parse(new_key, separator),
            copy: false,
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    pub fn policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn old_key(&self) -> &str {
        &self.old_key
    }

    pub fn new_key(&self) -> &str {
        &self.new_key
    }

    /// Check the move against the canonical tree before touching any file.
    pub fn check(&self, canonical: &Tree) -> Result<(), RekeyError> {
        if self.old == self.new {
            return Err(RekeyError::SameKey {
                key: self.old_key.clone(),
            });
        }
        if canonical.get(&self.old).is_none() {
            return Err(RekeyError::KeyNotFound {
                key: self.old_key.clone(),
            });
        }
        if self.policy == DuplicatePolicy::Forbid && canonical.get(&self.new).is_some() {
            return Err(RekeyError::KeyAlreadyExists {
                key: self.new_key.clone(),
            });
        }
        Ok(())
    }

    /// Apply the move to `tree` in place.
    ///
    /// Presence is what counts: an empty string at the old key is moved too.
    pub fn apply(&self, tree: &mut Tree) -> Result<RekeyOutcome, RekeyError> {
        let Some(node) = tree.get(&self.old).cloned() else {
            return Ok(RekeyOutcome::Skipped);
        };
        tree.set(&self.new, node)
            .map_err(|source| RekeyError::Collision {
                old: self.old_key.clone(),
                new: self.new_key.clone(),
                source,
            })?;
        if !self.copy {
            tree.unset(&self.old);
        }
        Ok(RekeyOutcome::Moved)
    }

    /// Apply the move to a locale tree, normalizing flat encoding first.
    ///
    /// Returns the rewritten tree, or `None` when the locale lacks the old key
    /// and should be left untouched.
    pub fn apply_locale(&self, tree: Tree, separator: &str) -> Result<Option<Tree>, RekeyError> {
        let mut tree = if is_flat(&tree, separator) {
            expand_flat(tree, separator).tree
        } else {
            tree
        };
        match self.apply(&mut tree)? {
            RekeyOutcome::Moved => Ok(Some(tree)),
            RekeyOutcome::Skipped => Ok(None),
        }
    }
}
