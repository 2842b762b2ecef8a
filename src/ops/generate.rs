//! Canonical tree generation.
//!
//! The canonical tree is rebuilt from scratch on every run: each key the
//! source code references keeps its existing English value, new keys are
//! seeded with the key text itself, and keys nothing references any more are
//! dropped.

use indexmap::IndexMap;
use thiserror::Error;

use crate::{
    core::{
        KeyPath, Node, Plural, ScanError, SourceScan, Tree, TreeError,
        extract::FileExtraction,
        parsers::source::RecoveredError,
        validate::{english_value, validate_call},
    },
    issues::InvalidCallIssue,
};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(
        "{}:{} {}: {}",
        .0.context.file_path(),
        .0.context.line(),
        .0.key,
        .0.error
    )]
    InvalidCall(Box<InvalidCallIssue>),

    #[error("cannot place \"{key}\"")]
    Collision { key: String, source: TreeError },
}

/// Number of distinct keys found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKeyCount {
    pub file_path: String,
    pub key_count: usize,
}

#[derive(Debug, Default)]
pub struct Generated {
    pub tree: Tree,
    /// Per-file key counts in traversal order.
    pub files: Vec<FileKeyCount>,
    /// Distinct keys written.
    pub key_count: usize,
    /// Recoverable syntax errors, per file.
    pub recovered: Vec<(String, RecoveredError)>,
}

/// Referenced keys in first-seen order, each with whether any call used it
/// pluralized.
#[derive(Debug, Default)]
pub struct KeyTable {
    keys: IndexMap<String, bool>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting of `key`. DOS line endings are normalized.
    pub fn record(&mut self, key: &str, plural: bool) {
        let key = key.replace("\r\n", "\n");
        *self.keys.entry(key).or_insert(false) |= plural;
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.keys.iter().map(|(key, plural)| (key.as_str(), *plural))
    }
}

/// Validate every eligible call of `extraction` against the old tree.
///
/// Calls are checked in source order; the first failure is returned.
pub fn validate_extraction(
    extraction: &FileExtraction,
    old: &Tree,
    separator: &str,
) -> Result<(), GenerateError> {
    for call in extraction.calls.iter().filter(|call| call.is_validated()) {
        let Some(english) = english_value(old, &call.key, separator) else {
            continue;
        };
        validate_call(call, english).map_err(|error| {
            GenerateError::InvalidCall(Box::new(InvalidCallIssue {
                context: call.context.clone(),
                key: call.key.clone(),
                error,
            }))
        })?;
    }
    Ok(())
}

/// Build the new canonical tree for the referenced `keys`.
pub fn build_tree(old: &Tree, keys: &KeyTable, separator: &str) -> Result<Tree, GenerateError> {
    let mut tree = Tree::new();

    for (key, plural) in keys.iter() {
        let path = KeyPath::parse(key, separator);
        let node = match old.get(&path) {
            Some(existing) if existing.has_value() => existing.clone(),
            _ if plural => Node::plural(Plural::seeded(key)),
            _ => Node::text(key),
        };
        tree.set(&path, node).map_err(|source| GenerateError::Collision {
            key: key.to_string(),
            source,
        })?;
    }

    Ok(tree)
}

/// Rebuild the canonical tree from `scan`, validating calls against `old`.
///
/// The scan is consumed in traversal order and the first failure aborts.
pub fn generate(old: &Tree, scan: SourceScan, separator: &str) -> Result<Generated, GenerateError> {
    let mut keys = KeyTable::new();
    let mut files = Vec::new();
    let mut recovered = Vec::new();

    for result in scan {
        let extraction = result?;
        validate_extraction(&extraction, old, separator)?;

        for call in &extraction.calls {
            keys.record(&call.key, call.is_plural());
        }
        files.push(FileKeyCount {
            file_path: extraction.file_path.clone(),
            key_count: extraction.keys().len(),
        });
        recovered.extend(
            extraction
                .recovered
                .into_iter()
                .map(|error| (extraction.file_path.clone(), error)),
        );
    }

    let tree = build_tree(old, &keys, separator)?;
    Ok(Generated {
        tree,
        files,
        key_count: keys.len(),
        recovered,
    })
}
