//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Rebuild the canonical translation file from source code
//! - `rekey`: Move or copy a key in every translation file
//! - `prune`: Remove locale translations the canonical file no longer has
//! - `lint`: Check the canonical file for bad keys and values
//! - `usage`: Show which files use which keys
//! - `sort`: Sort a translation file alphabetically
//! - `init`: Initialize lockey configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::lint::LintRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Rekey(cmd)) => cmd.common.verbose,
            Some(Command::Prune(cmd)) => cmd.common.verbose,
            Some(Command::Lint(cmd)) => cmd.common.verbose,
            Some(Command::Usage(cmd)) => cmd.common.verbose,
            Some(Command::Sort(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory; config discovery and relative paths start here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Separator between the segments of a nested key (overrides config file)
    #[arg(long, env = "NESTING_KEY")]
    pub separator: Option<String>,

    /// Canonical translation file (overrides config file)
    #[arg(long, env = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding the locale files (overrides config file)
    #[arg(long)]
    pub strings_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Directories to scan (default: config `searchPaths`)
    pub paths: Vec<String>,

    /// Where to write the canonical file (default: the input file)
    #[arg(long, env = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RekeyCommand {
    /// Key to move
    pub old: String,

    /// Destination key
    pub new: String,

    /// Keep the old key in place
    #[arg(long)]
    pub copy: bool,

    /// Overwrite the destination key if it already exists
    #[arg(long)]
    pub allow_existing: bool,

    /// Only touch these locales (e.g. `de`, `pt-br`); can be repeated
    #[arg(long)]
    pub locale: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PruneCommand {
    /// Report what would be removed without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Only touch these locales (e.g. `de`, `pt-br`); can be repeated
    #[arg(long)]
    pub locale: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LintCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<LintRule>,

    /// Words that must not appear in values, comma- or newline-separated
    /// (overrides config file)
    #[arg(long, env = "I18N_HARDCODED_WORDS")]
    pub hardcoded_words: Option<String>,

    /// Keys exempt from the hardcoded-word rule, comma- or newline-separated
    /// (overrides config file)
    #[arg(long, env = "I18N_ALLOWED_HARDCODED_KEYS")]
    pub allowed_keys: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UsageCommand {
    /// Key to look up; lists every key by usage count when omitted
    pub key: Option<String>,

    /// Directories to scan (default: config `searchPaths`); can be repeated
    #[arg(long = "path")]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SortCommand {
    /// File to sort (default: the input file)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rebuild the canonical translation file from the keys used in source code
    Generate(GenerateCommand),
    /// Move or copy a translation key in the canonical file and every locale
    Rekey(RekeyCommand),
    /// Remove locale translations whose keys are gone from the canonical file
    Prune(PruneCommand),
    /// Check the canonical file for malformed keys and placeholder values
    Lint(LintCommand),
    /// Show which source files use a key, or how often every key is used
    Usage(UsageCommand),
    /// Sort the keys of a translation file alphabetically
    Sort(SortCommand),
    /// Initialize a new .lockeyrc.json configuration file
    Init,
}
