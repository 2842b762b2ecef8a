use anyhow::Result;

use crate::{CliTest, EN_FILE, stderr, stdout};

#[test]
fn test_lint_clean_file() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, r#"{ "greeting": "Hello", "action": { "save": "Save" } }"#)?;

    let output = test.run(&["lint"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(&format!("Checked 2 keys in {} - no issues found", EN_FILE)));

    Ok(())
}

#[test]
fn test_lint_key_charset() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, "{\n    \"foo bar\": \"x\"\n}\n")?;

    let output = test.run(&["lint", "key-charset"])?;
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"foo bar\"  key-charset"), "stdout: {}", out);
    assert!(out.contains(&format!("--> {}:2", EN_FILE)), "stdout: {}", out);
    assert!(out.contains("1 problem (1 error, 0 warnings)"), "stdout: {}", out);

    Ok(())
}

#[test]
fn test_lint_key_equals_value() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, r#"{ "action": { "save": "save" } }"#)?;

    let output = test.run(&["lint", "key-equals-value"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("key-equals-value"));

    Ok(())
}

#[test]
fn test_lint_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, r#"{ "save": "save" }"#)?;

    let output = test.run(&["lint", "key-charset"])?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_lint_hardcoded_words() -> Result<()> {
    let test = CliTest::with_file(
        EN_FILE,
        r#"{ "welcome": "Welcome to Element", "brand": "Element" }"#,
    )?;

    let output = test
        .command()
        .args(["lint", "hardcoded-word", "--allowed-keys", "brand"])
        .env("I18N_HARDCODED_WORDS", "Element")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("warning: \"welcome\"  hardcoded-word"), "stdout: {}", out);
    assert!(!out.contains("\"brand\""), "stdout: {}", out);
    assert!(out.contains("1 problem (0 errors, 1 warning)"), "stdout: {}", out);

    Ok(())
}

#[test]
fn test_lint_hardcoded_words_from_config() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, r#"{ "about": "About Riot" }"#)?;
    test.write_file(".lockeyrc.json", r#"{ "hardcodedWords": "Riot" }"#)?;

    let output = test.run(&["lint", "hardcoded-word"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("contains \"Riot\""));

    Ok(())
}

#[test]
fn test_lint_invalid_json_is_an_error() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, "{ not json")?;

    let output = test.run(&["lint"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));

    Ok(())
}
