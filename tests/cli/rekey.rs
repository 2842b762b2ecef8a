use anyhow::Result;
use serde_json::json;

use crate::{CliTest, EN_FILE, stderr, stdout};

const DE_FILE: &str = "src/i18n/strings/de_DE.json";

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file(
        EN_FILE,
        r#"{ "action": { "save": "Save", "cancel": "Cancel" } }"#,
    )?;
    test.write_file(DE_FILE, r#"{ "action": { "save": "Speichern" } }"#)?;
    Ok(test)
}

#[test]
fn test_rekey_moves_in_every_file() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["rekey", "action|save", "common|save"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Moved \"action|save\" to \"common|save\" in 2 file(s)"));

    assert_eq!(
        test.read_json(EN_FILE)?,
        json!({ "action": { "cancel": "Cancel" }, "common": { "save": "Save" } })
    );
    assert_eq!(
        test.read_json(DE_FILE)?,
        json!({ "action": {}, "common": { "save": "Speichern" } })
    );

    Ok(())
}

#[test]
fn test_rekey_copy_keeps_old_key() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["rekey", "--copy", "action|save", "common|save"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Copied"));

    assert_eq!(
        test.read_json(DE_FILE)?,
        json!({ "action": { "save": "Speichern" }, "common": { "save": "Speichern" } })
    );

    Ok(())
}

#[test]
fn test_rekey_missing_key_fails() -> Result<()> {
    let test = setup()?;
    let before = test.read_file(EN_FILE)?;

    let output = test.run(&["rekey", "action|missing", "common|missing"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("key \"action|missing\" not found"));
    assert_eq!(test.read_file(EN_FILE)?, before);

    Ok(())
}

#[test]
fn test_rekey_existing_target_needs_flag() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["rekey", "action|save", "action|cancel"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));

    let output = test.run(&["rekey", "--allow-existing", "action|save", "action|cancel"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json(EN_FILE)?,
        json!({ "action": { "cancel": "Save" } })
    );

    Ok(())
}

#[test]
fn test_rekey_skips_locales_without_key() -> Result<()> {
    let test = setup()?;
    test.write_file("src/i18n/strings/fr.json", r#"{ "other": "Autre" }"#)?;

    let output = test.run(&["rekey", "action|save", "common|save"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("skipped: 1 locale file(s)"));
    assert_eq!(
        test.read_file("src/i18n/strings/fr.json")?,
        r#"{ "other": "Autre" }"#
    );

    Ok(())
}

#[test]
fn test_rekey_locale_filter() -> Result<()> {
    let test = setup()?;
    test.write_file(
        "src/i18n/strings/fr.json",
        r#"{ "action": { "save": "Enregistrer" } }"#,
    )?;

    let output = test.run(&["rekey", "--locale", "fr", "action|save", "common|save"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("src/i18n/strings/fr.json")?,
        json!({ "action": {}, "common": { "save": "Enregistrer" } })
    );
    assert_eq!(
        test.read_json(DE_FILE)?,
        json!({ "action": { "save": "Speichern" } })
    );

    Ok(())
}

#[test]
fn test_rekey_invalid_locale_leaves_all_files() -> Result<()> {
    let test = setup()?;
    test.write_file("src/i18n/strings/fr.json", "{ not json")?;
    let before = test.read_file(EN_FILE)?;

    let output = test.run(&["rekey", "action|save", "common|save"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load a locale file"));
    assert_eq!(test.read_file(EN_FILE)?, before);
    assert_eq!(
        test.read_json(DE_FILE)?,
        json!({ "action": { "save": "Speichern" } })
    );

    Ok(())
}
