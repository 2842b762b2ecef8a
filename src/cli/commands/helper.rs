use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>, exit_on_errors: bool) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        fatal: false,
    }
}

/// Result for a run stopped by `issue` before anything was written.
pub fn abort(issue: Issue) -> CommandResult {
    CommandResult {
        fatal: true,
        ..finish(CommandSummary::Aborted, vec![issue], true)
    }
}

/// Result of a command that reports no issues.
pub fn done(summary: CommandSummary) -> CommandResult {
    finish(summary, Vec::new(), true)
}
