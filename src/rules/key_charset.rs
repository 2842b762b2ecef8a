//! Key charset rule.
//!
//! The final segment of every key must consist of letters, digits, `_`, `@`
//! and `.`. Anything else (spaces, punctuation) usually means the English
//! text was used as a key.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::parsers::json::TranslationFile,
    issues::KeyCharsetIssue,
    rules::helpers::{lint_leaves, message_context},
};

static KEY_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9_@.]+$").unwrap());

/// Whether a key segment only uses allowed characters.
pub fn is_valid_segment(segment: &str) -> bool {
    KEY_CHARSET_REGEX.is_match(segment)
}

pub fn check_key_charset(file: &TranslationFile, separator: &str) -> Vec<KeyCharsetIssue> {
    lint_leaves(file, separator)
        .iter()
        .filter(|leaf| !is_valid_segment(leaf.segment()))
        .map(|leaf| KeyCharsetIssue {
            context: message_context(file, leaf),
            segment: leaf.segment().to_string(),
        })
        .collect()
}
