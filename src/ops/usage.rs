//! Reverse lookup from translation keys to the files that use them.

use indexmap::IndexMap;

use crate::core::extract::FileExtraction;

/// Keys are cut to this many characters when listed.
pub const DISPLAY_KEY_WIDTH: usize = 120;

/// Every call site of every key, by file.
#[derive(Debug, Default)]
pub struct UsageIndex {
    /// Key -> one file path per call, in traversal order.
    usages: IndexMap<String, Vec<String>>,
}

impl UsageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, extraction: &FileExtraction) {
        for call in &extraction.calls {
            self.usages
                .entry(call.key.clone())
                .or_default()
                .push(extraction.file_path.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.usages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Files calling `key`, once per call.
    pub fn consumers(&self, key: &str) -> Option<&[String]> {
        self.usages.get(key).map(Vec::as_slice)
    }

    /// Keys with their call counts, most used first. Ties keep first-seen
    /// order.
    pub fn by_count(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .usages
            .iter()
            .map(|(key, files)| (key.as_str(), files.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<'a> FromIterator<&'a FileExtraction> for UsageIndex {
    fn from_iter<I: IntoIterator<Item = &'a FileExtraction>>(iter: I) -> Self {
        let mut index = UsageIndex::new();
        for extraction in iter {
            index.add(extraction);
        }
        index
    }
}

/// Shorten `key` for display.
pub fn display_key(key: &str) -> String {
    key.chars().take(DISPLAY_KEY_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        SourceContext, SourceLocation,
        extract::{CallOrigin, ExtractedCall},
    };

    fn extraction(file_path: &str, keys: &[&str]) -> FileExtraction {
        FileExtraction {
            file_path: file_path.to_string(),
            calls: keys
                .iter()
                .map(|key| ExtractedCall {
                    context: SourceContext::new(SourceLocation::new(file_path, 1, 1), ""),
                    callee: "_t".to_string(),
                    key: key.to_string(),
                    substitutions: None,
                    tags: Vec::new(),
                    origin: CallOrigin::Script,
                })
                .collect(),
            recovered: Vec::new(),
        }
    }

    #[test]
    fn test_consumers() {
        let files = [
            extraction("src/a.ts", &["Save", "Cancel", "Save"]),
            extraction("src/b.ts", &["Save"]),
        ];
        let index: UsageIndex = files.iter().collect();
        assert_eq!(
            index.consumers("Save").unwrap(),
            ["src/a.ts", "src/a.ts", "src/b.ts"]
        );
        assert!(index.consumers("Missing").is_none());
    }

    #[test]
    fn test_by_count_is_stable() {
        let files = [
            extraction("src/a.ts", &["One", "Two", "Three"]),
            extraction("src/b.ts", &["Three", "Two"]),
        ];
        let index: UsageIndex = files.iter().collect();
        assert_eq!(index.by_count(), [("Two", 2), ("Three", 2), ("One", 1)]);
    }

    #[test]
    fn test_display_key_truncates() {
        let long = "x".repeat(130);
        assert_eq!(display_key(&long).len(), DISPLAY_KEY_WIDTH);
        assert_eq!(display_key("short"), "short");
    }
}
