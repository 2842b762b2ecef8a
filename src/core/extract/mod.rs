//! Source key extraction.
//!
//! Finds calls to the recognized translation functions in one source file and
//! resolves their literal key argument.
//!
//! ## Module Structure
//!
//! - `visitor`: swc AST walker (KeyCollector) and key folding

mod visitor;

use std::collections::HashSet;

use regex::Regex;
use swc_ecma_visit::VisitWith;

pub use visitor::{KeyCollector, fold_key};

use crate::core::parsers::source::{Dialect, RecoveredError, SourceParseError, parse_source};
use crate::core::{SourceContext, SourceLocation};

/// Translation functions recognized in every project.
pub const DEFAULT_FUNCTIONS: [&str; 3] = ["_t", "_td", "_tDom"];

/// The only function whose arguments are checked against the English value.
/// `_td` marks a string for extraction without substitutions.
pub const SUBSTITUTION_FUNCTION: &str = "_t";

/// Substitution property whose presence makes a call pluralized.
pub const COUNT_PROPERTY: &str = "count";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOrigin {
    /// Found by walking a parsed script.
    Script,
    /// Found by the markup regex; has no argument information.
    Markup,
}

/// One resolved translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCall {
    pub context: SourceContext,
    pub callee: String,
    pub key: String,
    /// Property names of the second argument, when it is an object literal.
    pub substitutions: Option<Vec<String>>,
    /// Property names of the third argument, when it is an object literal.
    pub tags: Vec<String>,
    pub origin: CallOrigin,
}

impl ExtractedCall {
    /// Whether the call passes a `count` substitution. Presence alone
    /// counts: `count: 0` is still pluralized.
    pub fn is_plural(&self) -> bool {
        self.substitutions
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == COUNT_PROPERTY))
    }

    /// Whether the call's arguments get validated against the English value.
    pub fn is_validated(&self) -> bool {
        self.origin == CallOrigin::Script && self.callee == SUBSTITUTION_FUNCTION
    }
}

/// Extraction result for one file.
#[derive(Debug, Clone, Default)]
pub struct FileExtraction {
    pub file_path: String,
    pub calls: Vec<ExtractedCall>,
    /// Syntax errors the parser recovered from.
    pub recovered: Vec<RecoveredError>,
}

impl FileExtraction {
    /// Distinct keys in first-seen order.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.calls
            .iter()
            .map(|call| call.key.as_str())
            .filter(|key| seen.insert(*key))
            .collect()
    }
}

/// Extracts translation calls using a fixed set of function names.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    functions: Vec<String>,
    lookup: HashSet<String>,
    markup: Regex,
}

impl KeyExtractor {
    /// Build an extractor recognizing the default functions plus `extra`.
    pub fn new(extra: &[String]) -> Result<Self, regex::Error> {
        let mut functions: Vec<String> = DEFAULT_FUNCTIONS.iter().map(|f| f.to_string()).collect();
        for name in extra {
            if !functions.contains(name) {
                functions.push(name.clone());
            }
        }
        let alternatives: Vec<String> = functions.iter().map(|f| regex::escape(f)).collect();
        let markup = Regex::new(&format!(
            r#"(?:{})\(['"]([\s\S]*?)['"]\)"#,
            alternatives.join("|")
        ))?;
        let lookup = functions.iter().cloned().collect();
        Ok(Self {
            functions,
            lookup,
            markup,
        })
    }

    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    /// Extract the translation calls of one file.
    pub fn extract(
        &self,
        file_path: &str,
        code: String,
        dialect: Dialect,
    ) -> Result<FileExtraction, SourceParseError> {
        if dialect == Dialect::Markup {
            return Ok(FileExtraction {
                file_path: file_path.to_string(),
                calls: self.extract_markup(file_path, &code),
                recovered: Vec::new(),
            });
        }

        let Some(parsed) = parse_source(code, file_path, dialect)? else {
            return Ok(FileExtraction {
                file_path: file_path.to_string(),
                ..Default::default()
            });
        };

        let mut collector = KeyCollector::new(file_path, &parsed.source_map, &self.lookup);
        parsed.module.visit_with(&mut collector);

        Ok(FileExtraction {
            file_path: file_path.to_string(),
            calls: collector.calls,
            recovered: parsed.recovered,
        })
    }

    fn extract_markup(&self, file_path: &str, code: &str) -> Vec<ExtractedCall> {
        self.markup
            .captures_iter(code)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let key = caps.get(1)?.as_str().to_string();
                let callee = whole.as_str().split('(').next().unwrap_or_default().to_string();

                let line_start = code[..whole.start()].rfind('\n').map_or(0, |i| i + 1);
                let line = code[..whole.start()].matches('\n').count() + 1;
                let col = code[line_start..whole.start()].chars().count() + 1;
                let source_line = code[line_start..].lines().next().unwrap_or_default();

                Some(ExtractedCall {
                    context: SourceContext::new(
                        SourceLocation::new(file_path, line, col),
                        source_line,
                    ),
                    callee,
                    key,
                    substitutions: None,
                    tags: Vec::new(),
                    origin: CallOrigin::Markup,
                })
            })
            .collect()
    }
}
