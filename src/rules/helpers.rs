//! Helpers shared by the lint rules.

use crate::core::{
    KeyPath, MessageContext, MessageLocation, Translation, parsers::json::TranslationFile,
};

/// One leaf of a translation file, ready to be checked.
pub struct LintLeaf<'a> {
    pub path: KeyPath,
    /// Full key path joined by the nesting separator.
    pub key: String,
    pub translation: &'a Translation,
}

impl LintLeaf<'_> {
    /// Final segment of the key path.
    pub fn segment(&self) -> &str {
        self.path.last().unwrap_or_default()
    }
}

/// Every leaf of `file`, depth-first in file order.
pub fn lint_leaves<'a>(file: &'a TranslationFile, separator: &str) -> Vec<LintLeaf<'a>> {
    file.tree
        .leaves()
        .map(|(path, translation)| LintLeaf {
            key: path.join(separator),
            path,
            translation,
        })
        .collect()
}

/// Issue context for a leaf, pointing at the line that declares it.
pub fn message_context(file: &TranslationFile, leaf: &LintLeaf<'_>) -> MessageContext {
    MessageContext::new(
        MessageLocation::new(
            file.path.to_string_lossy(),
            file.line_of(&leaf.path),
        ),
        leaf.key.clone(),
        leaf.translation.primary(),
    )
}
