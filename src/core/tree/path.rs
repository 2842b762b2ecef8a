//! Key path addressing.
//!
//! A key path is the ordered list of segments that leads from the root of a
//! translation tree to one node. Externally it is a single string joined by
//! the nesting separator (`|` by default), e.g. `room|settings|title`.

use std::fmt;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Ordered address of a node inside a [`Tree`](super::Tree).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Parse a raw key into segments.
    ///
    /// A literal backslash-n sequence is unescaped into a newline first, then
    /// the result is split on `separator`.
    ///
    /// ```
    /// use lockey::core::KeyPath;
    ///
    /// let path = KeyPath::parse("room|settings|title", "|");
    /// assert_eq!(path.segments(), ["room", "settings", "title"]);
    /// ```
    pub fn parse(raw: &str, separator: &str) -> Self {
        let unescaped = raw.replace("\\n", "\n");
        if separator.is_empty() {
            return Self(vec![unescaped]);
        }
        Self(unescaped.split(separator).map(str::to_owned).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// The path of the parent node, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<KeyPath> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// Serialize back into a raw key string.
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    /// Borrow the path as a displayable string joined by `separator`.
    pub fn display<'a>(&'a self, separator: &'a str) -> DisplayKeyPath<'a> {
        DisplayKeyPath {
            path: self,
            separator,
        }
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

pub struct DisplayKeyPath<'a> {
    path: &'a KeyPath,
    separator: &'a str,
}

impl fmt::Display for DisplayKeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.path.0.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_splits_on_separator() {
        let path = KeyPath::parse("a|b|c", "|");
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.last(), Some("c"));
    }

    #[test]
    fn test_parse_unescapes_newline_before_splitting() {
        let path = KeyPath::parse("line one\\nline two|x", "|");
        assert_eq!(path.segments(), ["line one\nline two", "x"]);
    }

    #[test]
    fn test_parse_with_dot_separator() {
        let path = KeyPath::parse("common.ok", ".");
        assert_eq!(path.segments(), ["common", "ok"]);
    }

    #[test]
    fn test_parse_without_separator_occurrence() {
        let path = KeyPath::parse("Hello world", "|");
        assert_eq!(path.segments(), ["Hello world"]);
    }

    #[test]
    fn test_join_round_trip() {
        let cases: &[&[&str]] = &[
            &["a"],
            &["room", "settings", "title"],
            &["Hello %(name)s", "other"],
            &["", "empty first"],
        ];
        for segments in cases {
            let path = KeyPath::from(*segments);
            let raw = path.join("|");
            assert_eq!(KeyPath::parse(&raw, "|"), path, "round trip of {raw:?}");
        }
    }

    #[test]
    fn test_parent() {
        let path = KeyPath::parse("a|b|c", "|");
        assert_eq!(path.parent(), Some(KeyPath::parse("a|b", "|")));
        assert_eq!(KeyPath::parse("a", "|").parent(), None);
    }

    #[test]
    fn test_display() {
        let path = KeyPath::parse("a|b", "|");
        assert_eq!(path.display(" > ").to_string(), "a > b");
    }
}
