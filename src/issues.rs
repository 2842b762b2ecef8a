//! Issue types reported by lockey.
//!
//! Lint rules produce issues for translation files; `generate` produces one
//! when a source file cannot be parsed or a translation call does not match
//! its English value. Each issue is self-contained with all information the
//! reporter needs.

use enum_dispatch::enum_dispatch;

use crate::core::validate::ValidationError;
use crate::core::{MessageContext, SourceContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    KeyCharset,
    KeyEqualsValue,
    HardcodedWord,
    InvalidCall,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::KeyCharset => write!(f, "key-charset"),
            Rule::KeyEqualsValue => write!(f, "key-equals-value"),
            Rule::HardcodedWord => write!(f, "hardcoded-word"),
            Rule::InvalidCall => write!(f, "invalid-call"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Translation Files (MessageContext)
// ============================================================

/// Final key segment uses characters outside `[a-z0-9_@.]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCharsetIssue {
    pub context: MessageContext,
    /// The offending segment.
    pub segment: String,
}

impl KeyCharsetIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::KeyCharset
    }
}

/// Value repeats its own key segment, usually a leftover seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEqualsValueIssue {
    pub context: MessageContext,
    /// Plural form holding the value, if the leaf is pluralized.
    pub form: Option<String>,
}

impl KeyEqualsValueIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::KeyEqualsValue
    }
}

/// Value contains a word that must be substituted rather than written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedWordIssue {
    pub context: MessageContext,
    /// The denylisted word as configured.
    pub word: String,
}

impl HardcodedWordIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::HardcodedWord
    }
}

// ============================================================
// Issue Types - Source Code (SourceContext)
// ============================================================

/// Translation call whose arguments do not fit its English value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCallIssue {
    pub context: SourceContext,
    /// The resolved translation key.
    pub key: String,
    pub error: ValidationError,
}

impl InvalidCallIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::InvalidCall
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    KeyCharset(KeyCharsetIssue),
    KeyEqualsValue(KeyEqualsValueIssue),
    HardcodedWord(HardcodedWordIssue),
    InvalidCall(InvalidCallIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// Translation file location (has key/value).
    Message(&'a MessageContext),
    /// File-level only.
    File { path: &'a str, line: Option<usize> },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for KeyCharsetIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "\"{}\" may only contain a-z, 0-9, _, @ and .",
            self.segment
        ))
    }
}

impl Report for KeyEqualsValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(match &self.form {
            Some(form) => format!("'{}' form repeats the key", form),
            None => "value repeats the key".to_string(),
        })
    }
}

impl Report for HardcodedWordIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") contains \"{}\"",
            self.context.value, self.word
        ))
    }
}

impl Report for InvalidCallIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.error.to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => &ctx.location.file_path,
            ReportLocation::Message(ctx) => &ctx.location.file_path,
            ReportLocation::File { path, .. } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.line,
            ReportLocation::Message(ctx) => ctx.location.line,
            ReportLocation::File { line, .. } => line.unwrap_or(0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
