use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, EN_FILE, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["nestingSeparator"], "|");
    assert_eq!(parsed["inputFile"], EN_FILE);
    assert!(
        parsed.get("searchPaths").is_some(),
        "Config should have 'searchPaths' field"
    );
    assert!(
        parsed.get("ignores").is_some(),
        "Config should have 'ignores' field"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .lockeyrc.json"));

    assert!(test.root().join(".lockeyrc.json").exists());
    assert_config_content(&test.read_file(".lockeyrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".lockeyrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".lockeyrc.json already exists"));
    assert_eq!(test.read_file(".lockeyrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;

    test.write_file("src/app.ts", r#"_t("Hello");"#)?;
    test.write_file(EN_FILE, "{}\n")?;

    let output = test.run(&["generate"])?;
    assert!(
        output.status.success(),
        "generate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(test.read_file(EN_FILE)?, "{\n    \"Hello\": \"Hello\"\n}\n");

    Ok(())
}
