//! Key-equals-value rule.
//!
//! `generate` seeds new keys with the key itself. A value still equal to its
//! key segment has never been given real English text.

use crate::{
    core::{Translation, parsers::json::TranslationFile, tree::{PLURAL_ONE, PLURAL_OTHER}},
    issues::KeyEqualsValueIssue,
    rules::helpers::{lint_leaves, message_context},
};

pub fn check_key_equals_value(
    file: &TranslationFile,
    separator: &str,
) -> Vec<KeyEqualsValueIssue> {
    let mut issues = Vec::new();

    for leaf in lint_leaves(file, separator) {
        let segment = leaf.segment();
        let form = match leaf.translation {
            Translation::Text(text) => (text == segment).then_some(None),
            Translation::Plural(plural) => {
                if plural.other() == segment {
                    Some(Some(PLURAL_OTHER.to_string()))
                } else if plural.one() == Some(segment) {
                    Some(Some(PLURAL_ONE.to_string()))
                } else {
                    None
                }
            }
        };

        if let Some(form) = form {
            issues.push(KeyEqualsValueIssue {
                context: message_context(file, &leaf),
                form,
            });
        }
    }

    issues
}
