//! Alphabetical ordering of translation files.

use crate::core::parsers::json::{TranslationFile, render_translations};

/// Render `file` with keys sorted at every level.
///
/// Returns `None` when the file is already stored that way.
pub fn sort_translations(file: &TranslationFile) -> Option<String> {
    let sorted = render_translations(&file.tree.clone().sorted());
    (sorted != file.content()).then_some(sorted)
}
