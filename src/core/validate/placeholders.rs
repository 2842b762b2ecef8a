//! printf-style placeholder grammar: `%(name)s`, with `%%` as a literal.

use super::ValidationError;

/// Collect the placeholder names of an English value, in first-seen order.
///
/// Every `%` starts a token that runs up to the next `%` or the end of the
/// string. A token must read `(name)c`; anything else, including a trailing
/// bare `%`, is malformed. Only `s` is accepted as the format character.
pub fn format_placeholders(value: &str) -> Result<Vec<String>, ValidationError> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = value;

    while let Some(pos) = rest.find('%') {
        let after = &rest[pos + 1..];
        if let Some(tail) = after.strip_prefix('%') {
            rest = tail;
            continue;
        }

        let token_end = after.find('%').unwrap_or(after.len());
        let token = &after[..token_end];
        let (name, format) = split_specifier(token).ok_or_else(|| {
            ValidationError::MalformedFormatSpecifier {
                specifier: format!("%{token}"),
            }
        })?;
        if format != 's' {
            return Err(ValidationError::UnexpectedFormatCharacter { found: format });
        }
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }

        rest = &after[token_end..];
    }

    Ok(names)
}

/// Split `(name)c...` into `name` and `c`. Line breaks are not allowed in
/// either part.
fn split_specifier(token: &str) -> Option<(&str, char)> {
    let inner = token.strip_prefix('(')?;
    let close = inner.find(|c| c == ')' || is_line_break(c))?;
    if !inner[close..].starts_with(')') {
        return None;
    }
    let format = inner[close + 1..].chars().next()?;
    if is_line_break(format) {
        return None;
    }
    Some((&inner[..close], format))
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
