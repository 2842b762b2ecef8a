//! Dispatches parsed arguments to the command handlers.
//!
//! # Returns
//! - `Ok(CommandResult)` with issues and exit behavior
//! - `Err` if the command fails outright (e.g. invalid config, unreadable
//!   files, a key that cannot be moved)

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, generate::generate, init::init, lint::lint, prune::prune, rekey::rekey,
        sort::sort, usage::usage,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Rekey(cmd)) => rekey(cmd),
        Some(Command::Prune(cmd)) => prune(cmd),
        Some(Command::Lint(cmd)) => lint(cmd),
        Some(Command::Usage(cmd)) => usage(cmd),
        Some(Command::Sort(cmd)) => sort(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
