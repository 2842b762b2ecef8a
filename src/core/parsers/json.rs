use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};
use thiserror::Error;

use crate::core::tree::{KeyPath, Tree, TreeError};

#[derive(Debug, Error)]
pub enum TranslationFileError {
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid JSON in {}: {reason}", path.display())]
    InvalidJson { path: PathBuf, reason: String },
}

/// A translation file loaded from disk.
///
/// The raw content is kept around so diagnostics can point at the line a key
/// is defined on.
#[derive(Debug, Clone)]
pub struct TranslationFile {
    pub path: PathBuf,
    pub tree: Tree,
    content: String,
    line_index: Vec<usize>,
}

impl TranslationFile {
    pub fn parse(path: impl Into<PathBuf>, content: String) -> Result<Self, TranslationFileError> {
        let path = path.into();
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| TranslationFileError::InvalidJson {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        let tree = Tree::from_json(value).map_err(|e: TreeError| {
            TranslationFileError::InvalidJson {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        let line_index = build_line_index(&content);
        Ok(Self {
            path,
            tree,
            content,
            line_index,
        })
    }

    /// File stem, e.g. `de_DE` for `strings/de_DE.json`.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// The file content as read from disk.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// 1-based line on which `path` is declared, as far as it can be found.
    pub fn line_of(&self, path: &KeyPath) -> usize {
        find_key_line(&self.content, path.segments(), &self.line_index)
    }
}

pub fn read_translations(path: impl AsRef<Path>) -> Result<TranslationFile, TranslationFileError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TranslationFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    TranslationFile::parse(path, content)
}

/// Render a tree the way translation files are stored: 4-space indentation
/// and a trailing newline.
pub fn render_translations(tree: &Tree) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    // Serializing a tree into memory cannot fail: every key is a string.
    if tree.serialize(&mut serializer).is_err() {
        return String::from("{}\n");
    }
    let mut rendered = String::from_utf8_lossy(&buf).into_owned();
    rendered.push('\n');
    rendered
}

pub fn write_translations(path: impl AsRef<Path>, tree: &Tree) -> Result<(), TranslationFileError> {
    let path = path.as_ref();
    fs::write(path, render_translations(tree)).map_err(|source| TranslationFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// List the `.json` files of a strings directory, sorted by file name.
pub fn list_translation_files(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a key path is declared.
///
/// Each segment is searched after the previous one, so `room|title` finds the
/// `"title"` nested under `"room"` rather than one in another subtree. Only
/// matches followed by `:` count, which skips values equal to a key.
fn find_key_line(content: &str, segments: &[String], line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for segment in segments {
        // Keys are stored JSON-escaped.
        let pattern = serde_json::to_string(segment).unwrap_or_else(|_| format!("\"{segment}\""));
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if after_pattern < remaining.len()
                && remaining[after_pattern..].trim_start().starts_with(':')
            {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_render_uses_four_spaces_and_trailing_newline() {
        let tree = Tree::from_json(json!({"a": {"b": "c"}, "d": "e"})).unwrap();
        assert_eq!(
            render_translations(&tree),
            "{\n    \"a\": {\n        \"b\": \"c\"\n    },\n    \"d\": \"e\"\n}\n"
        );
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(render_translations(&Tree::new()), "{}\n");
    }

    #[test]
    fn test_read_write_preserves_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("en_EN.json");
        let content = "{\n    \"z\": \"last\",\n    \"a\": {\n        \"one\": \"x\",\n        \"other\": \"y\"\n    }\n}\n";
        fs::write(&path, content).unwrap();

        let file = read_translations(&path).unwrap();
        write_translations(&path, &file.tree).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_translations(&path).unwrap_err();
        assert!(matches!(err, TranslationFileError::InvalidJson { .. }));
    }

    #[test]
    fn test_read_non_string_leaf_is_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("numbers.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        let err = read_translations(&path).unwrap_err();
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_translations("/nonexistent/en_EN.json").unwrap_err();
        assert!(matches!(err, TranslationFileError::Read { .. }));
        // The io error is the source, not part of the message.
        assert_eq!(err.to_string(), "failed to read /nonexistent/en_EN.json");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_line_of_nested_key() {
        let content = "{\n    \"auth\": {\n        \"title\": \"Login\"\n    },\n    \"room\": {\n        \"title\": \"Room\"\n    }\n}\n";
        let file = TranslationFile::parse("en.json", content.to_string()).unwrap();
        assert_eq!(file.line_of(&KeyPath::parse("room|title", "|")), 6);
        assert_eq!(file.line_of(&KeyPath::parse("auth|title", "|")), 3);
    }

    #[test]
    fn test_line_of_skips_value_matches() {
        let content = "{\n    \"a\": \"title\",\n    \"title\": \"x\"\n}";
        let file = TranslationFile::parse("en.json", content.to_string()).unwrap();
        assert_eq!(file.line_of(&KeyPath::parse("title", "|")), 3);
    }

    #[test]
    fn test_line_of_escaped_key() {
        let content = "{\n    \"a\": \"1\",\n    \"line\\nbreak\": \"2\"\n}";
        let file = TranslationFile::parse("en.json", content.to_string()).unwrap();
        assert_eq!(file.line_of(&KeyPath::parse("line\\nbreak", "|")), 3);
    }

    #[test]
    fn test_list_translation_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), "{}").unwrap();
        fs::write(dir.path().join("de.json"), "{}").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let names: Vec<String> = list_translation_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["de.json", "fr.json"]);
    }

    #[test]
    fn test_stem() {
        let file = TranslationFile::parse("/x/strings/de_DE.json", "{}".to_string()).unwrap();
        assert_eq!(file.stem(), "de_DE");
    }
}
