use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::RekeyCommand;
use super::helper::done;
use super::{CommandResult, CommandSummary, RekeySummary};
use crate::{
    core::{
        ProjectContext,
        parsers::json::{
            TranslationFile, list_translation_files, read_translations, write_translations,
        },
    },
    ops::rekey::{DuplicatePolicy, Rekey},
    utils::normalized_language_keys,
};

pub fn rekey(cmd: RekeyCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let separator = ctx.separator().to_string();

    let policy = if cmd.allow_existing {
        DuplicatePolicy::Allow
    } else {
        DuplicatePolicy::Forbid
    };
    let rekey = Rekey::new(&cmd.old, &cmd.new, &separator)
        .copy(cmd.copy)
        .policy(policy);

    let input = ctx.input_file();
    let mut canonical = read_translations(&input)?;
    rekey.check(&canonical.tree)?;

    // Every file is loaded before the first write, so an unreadable locale
    // leaves the whole set untouched.
    let locales = read_all(locale_files(&ctx, &cmd.locale)?)?;

    rekey.apply(&mut canonical.tree)?;
    write_translations(&input, &canonical.tree)?;

    let mut rewritten = vec![input.to_string_lossy().to_string()];
    let mut skipped_count = 0;

    for file in locales {
        let path = file.path;
        match rekey.apply_locale(file.tree, &separator) {
            Ok(Some(tree)) => {
                write_translations(&path, &tree)?;
                rewritten.push(path.to_string_lossy().to_string());
            }
            Ok(None) => skipped_count += 1,
            Err(err) => {
                eprintln!(
                    "{} {}: {:#}",
                    "warning:".bold().yellow(),
                    path.display(),
                    anyhow::Error::from(err)
                );
            }
        }
    }

    Ok(done(CommandSummary::Rekey(RekeySummary {
        old: cmd.old,
        new: cmd.new,
        copy: cmd.copy,
        rewritten,
        skipped_count,
    })))
}

/// Locale files of the strings directory, without the canonical file and
/// narrowed down to `locales` when any are given.
pub(super) fn locale_files(ctx: &ProjectContext, locales: &[String]) -> Result<Vec<PathBuf>> {
    let dir = ctx.strings_dir();
    let files = list_translation_files(&dir)
        .with_context(|| format!("Failed to read strings directory: {:?}", dir))?;

    Ok(files
        .into_iter()
        .filter(|path| !ctx.is_input_file(path))
        .filter(|path| matches_locale(path, locales))
        .collect())
}

/// Load every file of `paths`. An unreadable or invalid file fails the
/// command.
pub(super) fn read_all(paths: impl IntoIterator<Item = PathBuf>) -> Result<Vec<TranslationFile>> {
    paths
        .into_iter()
        .map(|path| read_translations(&path).context("Failed to load a locale file"))
        .collect()
}

fn matches_locale(path: &Path, locales: &[String]) -> bool {
    if locales.is_empty() {
        return true;
    }
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    let keys = normalized_language_keys(stem);
    locales.iter().any(|locale| {
        let wanted = normalized_language_keys(locale);
        wanted.first().is_some_and(|w| keys.contains(w))
    })
}
