//! Placeholder and tag validation of translation calls.
//!
//! A `_t` call must supply a substitution for every `%(name)s` placeholder of
//! the English value, and every tag substitution it supplies must correspond
//! to a marker in that value.

mod placeholders;
mod tags;

use thiserror::Error;

pub use placeholders::format_placeholders;
pub use tags::has_tag;

use crate::core::extract::ExtractedCall;
use crate::core::tree::{KeyPath, Tree};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid format specifier '{specifier}'")]
    MalformedFormatSpecifier { specifier: String },

    #[error("'{found}' used as format character: you probably meant 's'")]
    UnexpectedFormatCharacter { found: char },

    #[error("{}", missing_substitution_message(.placeholder, .substitutions_given))]
    MissingSubstitution {
        placeholder: String,
        substitutions_given: bool,
    },

    #[error("no <{tag}> marker in \"{value}\"")]
    UnmatchedTag { tag: String, value: String },

    #[error("invalid tag name '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },
}

fn missing_substitution_message(placeholder: &str, substitutions_given: &bool) -> String {
    if *substitutions_given {
        format!("no value found for placeholder '{placeholder}'")
    } else {
        format!("placeholder found ('{placeholder}') but no substitutions given")
    }
}

/// The English value a call is validated against: the string itself, or the
/// `other` form of a plural. `None` when the key is unknown or empty.
pub fn english_value<'a>(tree: &'a Tree, key: &str, separator: &str) -> Option<&'a str> {
    tree.get_leaf(&KeyPath::parse(key, separator))
        .map(|leaf| leaf.primary())
        .filter(|value| !value.is_empty())
}

/// Check one call's substitutions and tags against its English value.
///
/// Placeholders are checked first, then tags, each in order; the first
/// failure is returned.
pub fn validate_call(call: &ExtractedCall, english: &str) -> Result<(), ValidationError> {
    for placeholder in format_placeholders(english)? {
        let Some(names) = &call.substitutions else {
            return Err(ValidationError::MissingSubstitution {
                placeholder,
                substitutions_given: false,
            });
        };
        if !names.contains(&placeholder) {
            return Err(ValidationError::MissingSubstitution {
                placeholder,
                substitutions_given: true,
            });
        }
    }

    for tag in &call.tags {
        let matched = has_tag(english, tag).map_err(|e| ValidationError::InvalidTag {
            tag: tag.clone(),
            reason: e.to_string(),
        })?;
        if !matched {
            return Err(ValidationError::UnmatchedTag {
                tag: tag.clone(),
                value: english.to_string(),
            });
        }
    }

    Ok(())
}
