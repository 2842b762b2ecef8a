//! Common utility functions shared across the codebase.

/// Lowercase a language tag and turn its first `_` into `-`.
///
/// # Examples
///
/// ```
/// use lockey::utils::normalize_language_key;
///
/// assert_eq!(normalize_language_key("pt_BR"), "pt-br");
/// assert_eq!(normalize_language_key("de"), "de");
/// ```
pub fn normalize_language_key(language: &str) -> String {
    language.to_lowercase().replacen('_', "-", 1)
}

/// Keys a language can be looked up by, most specific first.
///
/// A regional tag also answers to its bare language (`pt-br` → `pt`). Tags
/// whose region repeats the language (`en_EN`, `de_DE`) collapse to the
/// language alone.
pub fn normalized_language_keys(language: &str) -> Vec<String> {
    let normalized = normalize_language_key(language);
    let parts: Vec<&str> = normalized.split('-').collect();
    match parts.as_slice() {
        [lang, region] if lang == region => vec![lang.to_string()],
        [lang, _] => vec![normalized.clone(), lang.to_string()],
        _ => vec![normalized],
    }
}

/// Split a newline- or comma-delimited list, dropping blank items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
