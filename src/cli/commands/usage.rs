use anyhow::Result;

use super::super::args::UsageCommand;
use super::helper::{abort, done};
use super::{CommandResult, CommandSummary, UsageSummary};
use crate::{
    core::{ProjectContext, ScanError},
    issues::{Issue, ParseErrorIssue},
    ops::usage::{UsageIndex, display_key},
};

pub fn usage(cmd: UsageCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let scan = ctx.extract_sources(&ctx.search_paths(&cmd.paths))?;

    let mut index = UsageIndex::new();
    for result in scan {
        match result {
            Ok(extraction) => index.add(&extraction),
            Err(ScanError::Parse(error)) => {
                return Ok(abort(Issue::ParseError(ParseErrorIssue {
                    file_path: error.file_path,
                    line: Some(error.line),
                    error: error.message,
                })));
            }
            Err(err) => return Err(err.into()),
        }
    }

    let summary = match cmd.key {
        Some(key) => {
            let files = index.consumers(&key).map(<[String]>::to_vec).unwrap_or_default();
            UsageSummary::Consumers { key, files }
        }
        None => UsageSummary::Counts(
            index
                .by_count()
                .into_iter()
                .map(|(key, count)| (display_key(key), count))
                .collect(),
        ),
    };

    Ok(done(CommandSummary::Usage(summary)))
}
