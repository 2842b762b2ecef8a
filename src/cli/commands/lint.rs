use anyhow::{Context, Result};
use clap::ValueEnum;

use super::super::args::LintCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, LintSummary},
};
use crate::{
    core::{ProjectContext, parsers::json::read_translations},
    issues::Rule,
    ops::lint::{LINT_RULES, lint as lint_file},
    rules::HardcodedWords,
    utils::split_list,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum LintRule {
    KeyCharset,
    KeyEqualsValue,
    HardcodedWord,
}

impl From<LintRule> for Rule {
    fn from(rule: LintRule) -> Self {
        match rule {
            LintRule::KeyCharset => Rule::KeyCharset,
            LintRule::KeyEqualsValue => Rule::KeyEqualsValue,
            LintRule::HardcodedWord => Rule::HardcodedWord,
        }
    }
}

pub fn lint(cmd: LintCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;

    let rules: Vec<Rule> = if cmd.rules.is_empty() {
        LINT_RULES.to_vec()
    } else {
        cmd.rules.iter().map(|&r| Rule::from(r)).collect()
    };

    let words = match &cmd.hardcoded_words {
        Some(text) => split_list(text),
        None => ctx.config.hardcoded_words.clone(),
    };
    let allowed = match &cmd.allowed_keys {
        Some(text) => split_list(text),
        None => ctx.config.allowed_hardcoded_keys.clone(),
    };
    let words = HardcodedWords::new(&words, &allowed).context("Invalid hardcoded word")?;

    let file = read_translations(ctx.input_file())?;
    let issues = lint_file(&file, ctx.separator(), &rules, &words);

    Ok(finish(
        CommandSummary::Lint(LintSummary {
            file: file.path.to_string_lossy().to_string(),
            key_count: file.tree.leaves().count(),
        }),
        issues,
        true,
    ))
}
