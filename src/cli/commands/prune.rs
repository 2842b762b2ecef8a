use anyhow::Result;

use super::super::args::PruneCommand;
use super::helper::done;
use super::rekey::{locale_files, read_all};
use super::{CommandResult, CommandSummary, PruneSummary};
use crate::{
    core::{
        ProjectContext,
        parsers::json::{read_translations, write_translations},
    },
    ops::prune::{CanonicalKeys, prune_locale},
};

pub fn prune(cmd: PruneCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let separator = ctx.separator();

    let canonical = read_translations(ctx.input_file())?;
    let canonical = CanonicalKeys::from_tree(&canonical.tree, separator);

    let paths = locale_files(&ctx, &cmd.locale)?
        .into_iter()
        .filter(|path| !ctx.is_base_file(path));
    let locales = read_all(paths)?;

    let mut files = Vec::new();
    for locale in locales {
        let path = locale.path;
        let pruned = prune_locale(locale.tree, &canonical, separator);
        if pruned.removed_count() == 0 {
            continue;
        }

        if ctx.verbose {
            for key in &pruned.removed {
                eprintln!("  {}: {}", path.display(), key);
            }
        }
        if !cmd.dry_run {
            write_translations(&path, &pruned.tree)?;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        files.push((name, pruned.removed_count()));
    }

    Ok(done(CommandSummary::Prune(PruneSummary {
        files,
        is_dry_run: cmd.dry_run,
    })))
}
