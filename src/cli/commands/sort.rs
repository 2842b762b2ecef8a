use std::fs;

use anyhow::{Context, Result};

use super::super::args::SortCommand;
use super::helper::done;
use super::{CommandResult, CommandSummary, SortSummary};
use crate::{
    core::{ProjectContext, parsers::json::read_translations},
    ops::sort::sort_translations,
};

pub fn sort(cmd: SortCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let path = match &cmd.file {
        Some(file) => ctx.resolve(file),
        None => ctx.input_file(),
    };

    let file = read_translations(&path)?;
    let changed = match sort_translations(&file) {
        Some(sorted) => {
            fs::write(&path, sorted)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            true
        }
        None => false,
    };

    Ok(done(CommandSummary::Sort(SortSummary {
        file: path.to_string_lossy().to_string(),
        changed,
    })))
}
