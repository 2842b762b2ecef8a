//! Translation tree codec.
//!
//! A translation file is a JSON object whose values are either nested objects
//! or leaves. A leaf is a plain string or a pluralized record such as
//! `{"one": "%(count)s file", "other": "%(count)s files"}`.
//!
//! In JSON the only thing that tells a pluralized leaf apart from a nested
//! object is the presence of an `other` field. That probe happens once, in the
//! decoder; in memory every node is an explicit [`Node`] variant.
//!
//! ## Module Structure
//!
//! - `path`: key path parsing and joining
//! - `codec`: JSON decoding/encoding of trees
//! - `flat`: normalization of legacy flat-encoded trees

mod codec;
pub mod flat;
mod path;

use indexmap::IndexMap;
use thiserror::Error;

pub use path::{DEFAULT_SEPARATOR, DisplayKeyPath, KeyPath};

/// Name of the mandatory plural form.
pub const PLURAL_OTHER: &str = "other";
/// Name of the singular plural form.
pub const PLURAL_ONE: &str = "one";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The path is empty and addresses nothing.
    #[error("empty key path")]
    EmptyPath,

    /// The path runs into a node of a different kind: it either traverses a
    /// leaf, or would replace a leaf with a subtree (or vice versa).
    #[error("key path collides with an existing {found} at segment \"{segment}\"")]
    PathCollision {
        path: KeyPath,
        segment: String,
        found: &'static str,
    },

    /// A JSON value that is neither a string, a plural record nor an object.
    #[error("unsupported value at \"{key}\": {reason}")]
    InvalidValue { key: String, reason: String },
}

/// A pluralized leaf.
///
/// Forms are kept in file order. `other` is always present; `one` is the only
/// other form the tooling ever creates, but additional forms written by
/// translators (`few`, `many`, ...) are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plural {
    forms: IndexMap<String, String>,
}

impl Plural {
    pub fn new(other: impl Into<String>, one: Option<String>) -> Self {
        let mut forms = IndexMap::new();
        forms.insert(PLURAL_OTHER.to_string(), other.into());
        if let Some(one) = one {
            forms.insert(PLURAL_ONE.to_string(), one);
        }
        Self { forms }
    }

    /// Placeholder record for a freshly discovered pluralized key: both forms
    /// are the key itself.
    pub fn seeded(key: &str) -> Self {
        Self::new(key, Some(key.to_string()))
    }

    /// Build from a list of forms. Returns `None` when `other` is missing.
    pub fn from_forms(forms: IndexMap<String, String>) -> Option<Self> {
        forms.contains_key(PLURAL_OTHER).then_some(Self { forms })
    }

    pub fn other(&self) -> &str {
        self.forms
            .get(PLURAL_OTHER)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn one(&self) -> Option<&str> {
        self.forms.get(PLURAL_ONE).map(String::as_str)
    }

    pub fn forms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Text(String),
    Plural(Plural),
}

impl Translation {
    /// The English value used for placeholder validation: the string itself,
    /// or the `other` form of a plural.
    pub fn primary(&self) -> &str {
        match self {
            Translation::Text(text) => text,
            Translation::Plural(plural) => plural.other(),
        }
    }

    /// All string forms of the leaf.
    pub fn strings(&self) -> Vec<&str> {
        match self {
            Translation::Text(text) => vec![text.as_str()],
            Translation::Plural(plural) => plural.forms().map(|(_, v)| v).collect(),
        }
    }
}

/// A node of the tree: a leaf or a nested subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Translation),
    Subtree(Tree),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf(Translation::Text(value.into()))
    }

    pub fn plural(plural: Plural) -> Self {
        Node::Leaf(Translation::Plural(plural))
    }

    pub fn as_leaf(&self) -> Option<&Translation> {
        match self {
            Node::Leaf(translation) => Some(translation),
            Node::Subtree(_) => None,
        }
    }

    /// Whether the node carries a usable value: an empty string does not.
    pub fn has_value(&self) -> bool {
        match self {
            Node::Leaf(Translation::Text(text)) => !text.is_empty(),
            Node::Leaf(Translation::Plural(_)) | Node::Subtree(_) => true,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Node::Leaf(_) => "translation",
            Node::Subtree(_) => "subtree",
        }
    }
}

/// An ordered translation tree. Entry order is insertion order, which is
/// also the order entries are written back to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: IndexMap<String, Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.entries.iter()
    }

    /// Mutable top-level entries in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Node)> {
        self.entries.iter_mut()
    }

    pub fn get_entry(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_entry_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Remove a top-level entry, keeping the order of the others.
    pub fn remove_entry(&mut self, key: &str) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    /// Insert a top-level entry, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        self.entries.insert(key.into(), node)
    }

    /// Look up the node at `path`. `None` means absent; an empty string or an
    /// empty subtree is still `Some`.
    pub fn get(&self, path: &KeyPath) -> Option<&Node> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            match current.entries.get(segment)? {
                Node::Subtree(tree) => current = tree,
                Node::Leaf(_) => return None,
            }
        }
        current.entries.get(last)
    }

    /// Look up a leaf at `path`.
    pub fn get_leaf(&self, path: &KeyPath) -> Option<&Translation> {
        self.get(path).and_then(Node::as_leaf)
    }

    /// Store `node` at `path`, creating intermediate subtrees as needed.
    ///
    /// Only the final segment is overwritten, and only by a node of the same
    /// kind. Returns the previous node at that position.
    pub fn set(&mut self, path: &KeyPath, node: Node) -> Result<Option<Node>, TreeError> {
        let (last, parents) = path.segments().split_last().ok_or(TreeError::EmptyPath)?;
        let mut current = self;
        for segment in parents {
            let entry = current
                .entries
                .entry(segment.clone())
                .or_insert_with(|| Node::Subtree(Tree::new()));
            match entry {
                Node::Subtree(tree) => current = tree,
                Node::Leaf(_) => {
                    return Err(TreeError::PathCollision {
                        path: path.clone(),
                        segment: segment.clone(),
                        found: "translation",
                    });
                }
            }
        }

        if let Some(existing) = current.entries.get(last)
            && std::mem::discriminant(existing) != std::mem::discriminant(&node)
        {
            return Err(TreeError::PathCollision {
                path: path.clone(),
                segment: last.clone(),
                found: existing.kind(),
            });
        }

        Ok(current.entries.insert(last.clone(), node))
    }

    /// Remove the node at `path` and return it.
    ///
    /// Ancestors are left in place even when they become empty, so repeated
    /// calls on the same path are harmless.
    pub fn unset(&mut self, path: &KeyPath) -> Option<Node> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            match current.entries.get_mut(segment)? {
                Node::Subtree(tree) => current = tree,
                Node::Leaf(_) => return None,
            }
        }
        current.entries.shift_remove(last)
    }

    /// Deep-merge `other` into `self`. Subtrees present on both sides are
    /// merged recursively; anything else is taken from `other`.
    pub fn merge(&mut self, other: Tree) {
        for (key, node) in other.entries {
            match node {
                Node::Subtree(theirs) => {
                    if let Some(Node::Subtree(mine)) = self.entries.get_mut(&key) {
                        mine.merge(theirs);
                    } else {
                        self.entries.insert(key, Node::Subtree(theirs));
                    }
                }
                leaf => {
                    self.entries.insert(key, leaf);
                }
            }
        }
    }

    /// Lazily enumerate every leaf depth-first, with its full path.
    ///
    /// Pluralized leaves are yielded whole; their forms are never visited as
    /// separate keys.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![self.entries.iter()],
            prefix: Vec::new(),
        }
    }

    /// Drop subtrees left empty by [`Tree::unset`]. Returns how many were
    /// removed.
    pub fn prune_empty(&mut self) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, node| match node {
            Node::Subtree(tree) => {
                removed += tree.prune_empty();
                if tree.is_empty() {
                    removed += 1;
                    false
                } else {
                    true
                }
            }
            Node::Leaf(_) => true,
        });
        removed
    }

    /// Return the tree with keys sorted alphabetically at every level.
    /// Plural forms keep their own order.
    pub fn sorted(self) -> Tree {
        let mut entries: Vec<(String, Node)> = self
            .entries
            .into_iter()
            .map(|(key, node)| match node {
                Node::Subtree(tree) => (key, Node::Subtree(tree.sorted())),
                leaf => (key, leaf),
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Tree {
            entries: entries.into_iter().collect(),
        }
    }
}

impl IntoIterator for Tree {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Node)> for Tree {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Tree {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Depth-first leaf iterator returned by [`Tree::leaves`].
pub struct Leaves<'a> {
    stack: Vec<indexmap::map::Iter<'a, String, Node>>,
    prefix: Vec<&'a str>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (KeyPath, &'a Translation);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some((key, Node::Leaf(translation))) => {
                    let mut segments: Vec<String> =
                        self.prefix.iter().map(|s| s.to_string()).collect();
                    segments.push(key.clone());
                    return Some((KeyPath::from(segments), translation));
                }
                Some((key, Node::Subtree(tree))) => {
                    self.prefix.push(key);
                    self.stack.push(tree.entries.iter());
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}
