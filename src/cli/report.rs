//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow lockey to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, LintSummary, PruneSummary,
    RekeySummary, SortSummary, UsageSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// Issues are displayed in the order given, followed by a summary line.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, verbose, &mut out, &mut err);
}

/// Print a command result: results to `out`, diagnostics to `err`.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, out, err),
        CommandSummary::Rekey(summary) => print_rekey(summary, verbose, out),
        CommandSummary::Prune(summary) => print_prune(summary, out),
        CommandSummary::Lint(summary) => print_lint(summary, &result.issues, out),
        CommandSummary::Usage(summary) => print_usage(summary, out),
        CommandSummary::Sort(summary) => print_sort(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out),
        CommandSummary::Aborted => {
            report_to(&result.issues, out);
            let _ = writeln!(
                err,
                "{} aborting; no translation file was written",
                "error:".bold().red()
            );
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location
    let _ = writeln!(writer, "  {} {}", "-->".blue(), format_location(&loc));

    // Print source context if available
    if let ReportLocation::Source(ctx) = loc {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };
        let line = ctx.line();
        let col = ctx.col();
        let source_line = &ctx.source_line;

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn format_location(loc: &ReportLocation<'_>) -> String {
    match loc {
        ReportLocation::Source(ctx) => format!("{}:{}:{}", ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::Message(ctx) => format!("{}:{}", ctx.file_path(), ctx.line()),
        ReportLocation::File {
            path,
            line: Some(line),
        } => format!("{}:{}", path, line),
        ReportLocation::File { path, line: None } => path.to_string(),
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::Message(_) | ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_generate<W: Write, E: Write>(
    summary: &GenerateSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    let _ = writeln!(
        out,
        "Searching for translations in: {}",
        summary.search_paths.join(",")
    );

    if verbose {
        for file in &summary.files {
            let _ = writeln!(out, "{} ({} strings)", file.file_path, file.key_count);
        }
        for (file_path, error) in &summary.recovered {
            let _ = writeln!(
                err,
                "{} {}:{}: {}",
                "warning:".bold().yellow(),
                file_path,
                error.line,
                error.message
            );
        }
    } else if !summary.recovered.is_empty() {
        let _ = writeln!(
            err,
            "{} {} recoverable syntax error(s) ignored (use {} for details)",
            "warning:".bold().yellow(),
            summary.recovered.len(),
            "-v".cyan()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Wrote {} strings to {}",
        summary.key_count, summary.output
    );
}

fn print_rekey<W: Write>(summary: &RekeySummary, verbose: bool, out: &mut W) {
    let verb = if summary.copy { "Copied" } else { "Moved" };
    let _ = writeln!(
        out,
        "{} {} \"{}\" to \"{}\" in {} file(s)",
        SUCCESS_MARK.green(),
        verb.green().bold(),
        summary.old,
        summary.new,
        summary.rewritten.len()
    );
    if verbose {
        for file in &summary.rewritten {
            let _ = writeln!(out, "  - {}", file);
        }
    }
    if summary.skipped_count > 0 {
        let _ = writeln!(
            out,
            "  - skipped: {} locale file(s) without \"{}\"",
            summary.skipped_count, summary.old
        );
    }
}

fn print_prune<W: Write>(summary: &PruneSummary, out: &mut W) {
    if summary.files.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            "Nothing to prune".green()
        );
        return;
    }

    let verb = if summary.is_dry_run {
        "would remove"
    } else {
        "removed"
    };
    for (file, count) in &summary.files {
        let _ = writeln!(out, "{}: {} {} translations", file, verb, count);
    }
    if summary.is_dry_run {
        let _ = writeln!(out, "Run without {} to remove them.", "--dry-run".cyan());
    }
}

fn print_lint<W: Write>(summary: &LintSummary, issues: &[Issue], out: &mut W) {
    if issues.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} in {} - no issues found",
                summary.key_count,
                if summary.key_count == 1 { "key" } else { "keys" },
                summary.file
            )
            .green()
        );
    } else {
        report_to(issues, out);
    }
}

fn print_usage<W: Write>(summary: &UsageSummary, out: &mut W) {
    match summary {
        UsageSummary::Consumers { key, files } => {
            let _ = writeln!(out, "Consumers of \"{}\":", key);
            if files.is_empty() {
                let _ = writeln!(out, "  {}", "(no usages found)".dimmed());
            }
            for file in files {
                let _ = writeln!(out, "  {}", file);
            }
        }
        UsageSummary::Counts(counts) => {
            let width = counts
                .first()
                .map(|(_, count)| count.to_string().len())
                .unwrap_or(1);
            for (key, count) in counts {
                let _ = writeln!(out, "{:>width$}  {}", count, key, width = width);
            }
        }
    }
}

fn print_sort<W: Write>(summary: &SortSummary, out: &mut W) {
    let message = if summary.changed {
        format!("Sorted {}", summary.file)
    } else {
        format!("{} is already sorted", summary.file)
    };
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
