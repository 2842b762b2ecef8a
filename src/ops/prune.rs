//! Pruning of locale entries the canonical tree no longer has.
//!
//! Locale files may be nested or flat-encoded, and pruning keeps whichever
//! encoding a file already uses. Flat entries are judged by their base key,
//! nested ones by their full key path.

use std::collections::HashSet;

use crate::core::{
    KeyPath, Node, Tree,
    tree::flat::{base_key, expand_flat},
};

/// Keys of the canonical tree, as pruning looks them up.
#[derive(Debug, Clone, Default)]
pub struct CanonicalKeys {
    /// Full key paths of every leaf, joined by the separator.
    paths: HashSet<String>,
    /// First segment of every leaf path.
    bases: HashSet<String>,
}

impl CanonicalKeys {
    pub fn from_tree(canonical: &Tree, separator: &str) -> Self {
        let expanded = expand_flat(canonical.clone(), separator).tree;
        let mut keys = Self::default();
        for (path, _) in expanded.leaves() {
            if let Some(first) = path.segments().first() {
                keys.bases.insert(first.clone());
            }
            keys.paths.insert(path.join(separator));
        }
        keys
    }

    pub fn has_path(&self, key: &str) -> bool {
        self.paths.contains(key)
    }

    pub fn has_base(&self, key: &str) -> bool {
        self.bases.contains(key)
    }
}

/// Result of pruning one locale tree.
#[derive(Debug, Default)]
pub struct Pruned {
    pub tree: Tree,
    /// Joined key paths of the removed translations, in file order.
    pub removed: Vec<String>,
}

impl Pruned {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Remove every translation of `locale` that `canonical` does not define.
///
/// A top-level flat entry (`key|variant`) is kept when its base key is
/// canonical. Its plain sibling `key`, left over from before the string was
/// pluralized, is removed either way.
pub fn prune_locale(locale: Tree, canonical: &CanonicalKeys, separator: &str) -> Pruned {
    let is_flat_key = |key: &str| !separator.is_empty() && key.contains(separator);

    let superseded: HashSet<String> = locale
        .iter()
        .filter(|(key, _)| is_flat_key(key.as_str()))
        .map(|(key, _)| base_key(key, separator).to_string())
        .collect();

    let mut pruned = Pruned::default();
    for (key, node) in locale {
        if is_flat_key(key.as_str()) {
            if canonical.has_base(base_key(&key, separator)) {
                pruned.tree.insert(key, node);
            } else {
                pruned.removed.push(key);
            }
            continue;
        }

        if matches!(node, Node::Leaf(_)) && superseded.contains(&key) {
            pruned.removed.push(key);
            continue;
        }

        let path = KeyPath::from(vec![key.clone()]);
        if let Some(node) = prune_node(node, &path, canonical, separator, &mut pruned.removed) {
            pruned.tree.insert(key, node);
        }
    }

    pruned
}

/// Prune a nested node, returning what is left of it.
///
/// Subtrees emptied by pruning are dropped; subtrees that were already empty
/// are kept as they are.
fn prune_node(
    node: Node,
    path: &KeyPath,
    canonical: &CanonicalKeys,
    separator: &str,
    removed: &mut Vec<String>,
) -> Option<Node> {
    match node {
        Node::Leaf(_) => {
            let key = path.join(separator);
            if canonical.has_path(&key) {
                Some(node)
            } else {
                removed.push(key);
                None
            }
        }
        Node::Subtree(tree) => {
            let removed_before = removed.len();
            let mut kept = Tree::new();
            for (key, child) in tree {
                let mut child_path = path.clone();
                child_path.push(key.clone());
                if let Some(child) = prune_node(child, &child_path, canonical, separator, removed) {
                    kept.insert(key, child);
                }
            }
            if kept.is_empty() && removed.len() > removed_before {
                None
            } else {
                Some(Node::Subtree(kept))
            }
        }
    }
}
