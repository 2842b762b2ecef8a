//! Hardcoded word rule.
//!
//! Product names and similar words are substituted at runtime rather than
//! written into translations. A value spelling one out is reported unless its
//! key is explicitly allowed.

use std::collections::HashSet;

use regex::Regex;

use crate::{
    core::parsers::json::TranslationFile,
    issues::HardcodedWordIssue,
    rules::helpers::{lint_leaves, message_context},
};

/// Compiled denylist plus the keys exempt from it.
#[derive(Debug, Clone, Default)]
pub struct HardcodedWords {
    words: Vec<(String, Regex)>,
    allowed_keys: HashSet<String>,
}

impl HardcodedWords {
    /// Compile `words` into case-insensitive whole-word patterns.
    pub fn new(words: &[String], allowed_keys: &[String]) -> Result<Self, regex::Error> {
        let words = words
            .iter()
            .map(|word| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
                Regex::new(&pattern).map(|re| (word.clone(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            words,
            allowed_keys: allowed_keys.iter().cloned().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First denylisted word found in `value`.
    pub fn find_in(&self, value: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|(_, re)| re.is_match(value))
            .map(|(word, _)| word.as_str())
    }

    pub fn is_allowed(&self, key: &str) -> bool {
        self.allowed_keys.contains(key)
    }
}

/// Report each leaf whose forms contain a denylisted word, once per word.
pub fn check_hardcoded_words(
    file: &TranslationFile,
    separator: &str,
    words: &HardcodedWords,
) -> Vec<HardcodedWordIssue> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut issues = Vec::new();
    for leaf in lint_leaves(file, separator) {
        if words.is_allowed(&leaf.key) {
            continue;
        }

        let mut reported: Vec<&str> = Vec::new();
        for value in leaf.translation.strings() {
            let Some(word) = words.find_in(value) else {
                continue;
            };
            if reported.contains(&word) {
                continue;
            }
            reported.push(word);

            let mut context = message_context(file, &leaf);
            context.value = value.to_string();
            issues.push(HardcodedWordIssue {
                context,
                word: word.to_string(),
            });
        }
    }

    issues
}
