use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

use crate::{CliTest, EN_FILE, stderr, stdout};

const DE_FILE: &str = "src/i18n/strings/de_DE.json";

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file(EN_FILE, r#"{ "a": { "b": "B" } }"#)?;
    test.write_file(DE_FILE, r#"{ "a": { "b": "Bee", "c": "Cee" } }"#)?;
    Ok(test)
}

#[test]
fn test_prune_removes_unknown_keys() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["prune"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @"de_DE.json: removed 1 translations");
    assert_eq!(test.read_json(DE_FILE)?, json!({ "a": { "b": "Bee" } }));

    Ok(())
}

#[test]
fn test_prune_dry_run_leaves_files() -> Result<()> {
    let test = setup()?;
    let before = test.read_file(DE_FILE)?;

    let output = test.run(&["prune", "--dry-run"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("de_DE.json: would remove 1 translations"));
    assert!(out.contains("Run without --dry-run"));
    assert_eq!(test.read_file(DE_FILE)?, before);

    Ok(())
}

#[test]
fn test_prune_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, r#"{ "a": "A" }"#)?;
    test.write_file(DE_FILE, r#"{ "a": "Ah" }"#)?;

    let output = test.run(&["prune"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Nothing to prune"));
    assert_eq!(test.read_file(DE_FILE)?, r#"{ "a": "Ah" }"#);

    Ok(())
}

#[test]
fn test_prune_skips_base_file() -> Result<()> {
    let test = setup()?;
    test.write_file("src/i18n/strings/basefile.json", r#"{ "template": "x" }"#)?;

    let output = test.run(&["prune"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("src/i18n/strings/basefile.json")?,
        r#"{ "template": "x" }"#
    );

    Ok(())
}

#[test]
fn test_prune_keeps_flat_plural_keys() -> Result<()> {
    let test = CliTest::with_file(
        EN_FILE,
        r#"{ "files": { "one": "%(count)s file", "other": "%(count)s files" } }"#,
    )?;
    test.write_file(
        DE_FILE,
        r#"{ "files|one": "%(count)s Datei", "files|other": "%(count)s Dateien", "gone|other": "x" }"#,
    )?;

    let output = test.run(&["prune"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json(DE_FILE)?,
        json!({ "files|one": "%(count)s Datei", "files|other": "%(count)s Dateien" })
    );

    Ok(())
}

#[test]
fn test_prune_invalid_locale_fails() -> Result<()> {
    let test = setup()?;
    test.write_file("src/i18n/strings/fr.json", "{ not json")?;
    let before = test.read_file(DE_FILE)?;

    let output = test.run(&["prune"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load a locale file"));
    assert_eq!(test.read_file(DE_FILE)?, before);

    Ok(())
}
