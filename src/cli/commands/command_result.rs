use crate::{
    core::parsers::source::RecoveredError,
    issues::Issue,
    ops::generate::FileKeyCount,
};

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Rekey(RekeySummary),
    Prune(PruneSummary),
    Lint(LintSummary),
    Usage(UsageSummary),
    Sort(SortSummary),
    Init(InitSummary),
    /// The run stopped at a fatal issue; nothing was written.
    Aborted,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub search_paths: Vec<String>,
    pub files: Vec<FileKeyCount>,
    pub key_count: usize,
    pub output: String,
    /// Recoverable syntax errors, by file.
    pub recovered: Vec<(String, RecoveredError)>,
}

#[derive(Debug)]
pub struct RekeySummary {
    pub old: String,
    pub new: String,
    pub copy: bool,
    /// Files rewritten, canonical file first.
    pub rewritten: Vec<String>,
    /// Locale files without the old key.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct PruneSummary {
    /// Files with something to remove, and how many translations.
    pub files: Vec<(String, usize)>,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct LintSummary {
    pub file: String,
    pub key_count: usize,
}

#[derive(Debug)]
pub enum UsageSummary {
    /// Files using one key, once per call.
    Consumers { key: String, files: Vec<String> },
    /// Every key with its call count, most used first.
    Counts(Vec<(String, usize)>),
}

#[derive(Debug)]
pub struct SortSummary {
    pub file: String,
    pub changed: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lockey commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found by the command, sorted.
    pub issues: Vec<Issue>,
    /// Whether an issue stopped the run (exit code 2).
    pub fatal: bool,
}
