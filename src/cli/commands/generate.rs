use std::path::Path;

use anyhow::{Context, Result};

use super::super::args::GenerateCommand;
use super::helper::{abort, done};
use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::{
    core::{
        ProjectContext, ScanError, Tree,
        parsers::json::{TranslationFileError, read_translations, write_translations},
    },
    issues::{Issue, ParseErrorIssue},
    ops::generate::{GenerateError, generate as generate_tree},
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let mut ctx = ProjectContext::new(&cmd.common)?;
    if let Some(output) = &cmd.output {
        ctx.config.output_file = Some(output.to_string_lossy().to_string());
    }

    let separator = ctx.separator().to_string();
    let old = read_canonical(&ctx.input_file())?;

    let search_paths = ctx.search_paths(&cmd.paths);
    let scan = ctx.extract_sources(&search_paths)?;

    let generated = match generate_tree(&old, scan, &separator) {
        Ok(generated) => generated,
        Err(GenerateError::InvalidCall(issue)) => return Ok(abort(Issue::InvalidCall(*issue))),
        Err(GenerateError::Scan(ScanError::Parse(error))) => {
            return Ok(abort(Issue::ParseError(ParseErrorIssue {
                file_path: error.file_path,
                line: Some(error.line),
                error: error.message,
            })));
        }
        Err(err) => return Err(err.into()),
    };

    let output = ctx.output_file();
    write_translations(&output, &generated.tree)?;

    Ok(done(CommandSummary::Generate(GenerateSummary {
        search_paths: search_paths
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        files: generated.files,
        key_count: generated.key_count,
        output: output.to_string_lossy().to_string(),
        recovered: generated.recovered,
    })))
}

/// The canonical tree values are preserved from. A missing file means a
/// first run and starts from an empty tree.
fn read_canonical(path: &Path) -> Result<Tree> {
    match read_translations(path) {
        Ok(file) => Ok(file.tree),
        Err(TranslationFileError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Ok(Tree::new())
        }
        Err(err) => Err(err).context("Failed to load the canonical translation file"),
    }
}
