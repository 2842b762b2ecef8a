use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::core::parsers::source::Dialect;

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Scannable files in traversal order.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Walk `search_paths` and collect every file with a scannable extension.
///
/// Siblings are visited in case-insensitive alphabetical order, so the
/// traversal order (and everything derived from it) is stable across
/// platforms. Missing search paths are skipped.
pub fn scan_files(search_paths: &[PathBuf], ignore_patterns: &[Pattern], verbose: bool) -> ScanResult {
    let mut result = ScanResult::default();

    for root in search_paths {
        if !root.exists() {
            if verbose {
                eprintln!(
                    "{} Search path does not exist: {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
            continue;
        }

        let walker = WalkDir::new(root)
            .sort_by(compare_case_insensitive)
            .into_iter()
            .filter_entry(|entry| !is_ignored(entry.path(), ignore_patterns));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            if entry.file_type().is_file() && Dialect::from_path(entry.path()).is_some() {
                result.files.push(entry.into_path());
            }
        }
    }

    result
}

fn compare_case_insensitive(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a = a.file_name().to_string_lossy().to_lowercase();
    let b = b.file_name().to_string_lossy().to_lowercase();
    a.cmp(&b)
}

fn is_ignored(path: &Path, ignore_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    ignore_patterns.iter().any(|p| p.matches(&path_str))
}
