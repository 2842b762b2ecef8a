//! Flat key encoding.
//!
//! Older tooling stored translations as a single-level object whose keys are
//! already joined by the nesting separator, with plural forms as sibling
//! variants:
//!
//! ```json
//! { "room|title": "Room", "files|one": "%(count)s file", "files|other": "%(count)s files" }
//! ```
//!
//! Locale files produced that way may still be around, so the maintenance
//! operators normalize them into nested form before touching them.

use std::collections::HashSet;

use super::{KeyPath, Node, PLURAL_OTHER, Plural, Translation, Tree};

/// Prefix of a flat key before its first separator.
pub fn base_key<'a>(key: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return key;
    }
    key.split_once(separator).map_or(key, |(base, _)| base)
}

/// Whether any top-level key is separator-joined.
pub fn is_flat(tree: &Tree, separator: &str) -> bool {
    !separator.is_empty() && tree.iter().any(|(key, _)| key.contains(separator))
}

/// Result of [`expand_flat`].
#[derive(Debug, Default)]
pub struct Expanded {
    pub tree: Tree,
    /// Top-level leaves dropped because a flat variant of the same key exists
    /// (`key` next to `key|one`).
    pub superseded: Vec<String>,
}

/// Convert a flat-encoded tree into nested form.
///
/// Top-level keys containing `separator` are split into paths (no `\n`
/// unescaping: these are stored keys, not user input). A subtree whose only
/// children are strings and which contains `other` becomes a plural leaf.
/// Keys that cannot be placed without overwriting a different kind of node
/// are kept verbatim under their flat key.
pub fn expand_flat(tree: Tree, separator: &str) -> Expanded {
    if !is_flat(&tree, separator) {
        return Expanded {
            tree,
            superseded: Vec::new(),
        };
    }

    let mut expanded = Tree::new();
    let mut superseded = Vec::new();
    let mut touched: HashSet<String> = HashSet::new();

    for (key, node) in tree {
        if !key.contains(separator) {
            match (expanded.get_entry(&key), &node) {
                // A flat variant already claimed this key.
                (Some(Node::Subtree(_)), Node::Leaf(_)) => {
                    superseded.push(key);
                }
                (Some(Node::Subtree(_)), Node::Subtree(_)) => {
                    let mut merged = Tree::new();
                    merged.insert(key, node);
                    expanded.merge(merged);
                }
                _ => {
                    expanded.insert(key, node);
                }
            }
            continue;
        }

        let path = KeyPath::from(
            key.split(separator)
                .map(str::to_owned)
                .collect::<Vec<String>>(),
        );
        let base = base_key(&key, separator).to_string();

        if let Some(Node::Leaf(Translation::Text(_))) = expanded.get_entry(&base) {
            expanded.remove_entry(&base);
            superseded.push(base.clone());
        }

        match expanded.set(&path, node.clone()) {
            Ok(_) => {
                touched.insert(base);
            }
            Err(_) => {
                expanded.insert(key, node);
            }
        }
    }

    for key in &touched {
        if let Some(node) = expanded.get_entry_mut(key) {
            collapse_plurals(node);
        }
    }

    Expanded {
        tree: expanded,
        superseded,
    }
}

fn collapse_plurals(node: &mut Node) {
    let Node::Subtree(tree) = node else {
        return;
    };

    let is_plural = tree.get_entry(PLURAL_OTHER).is_some()
        && tree
            .iter()
            .all(|(_, child)| matches!(child, Node::Leaf(Translation::Text(_))));

    if is_plural {
        let forms = tree
            .iter()
            .filter_map(|(form, child)| match child {
                Node::Leaf(Translation::Text(text)) => Some((form.clone(), text.clone())),
                _ => None,
            })
            .collect();
        if let Some(plural) = Plural::from_forms(forms) {
            *node = Node::plural(plural);
        }
        return;
    }

    for (_, child) in tree.iter_mut() {
        collapse_plurals(child);
    }
}
