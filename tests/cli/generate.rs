use std::fs;

use anyhow::Result;
use serde_json::json;

use crate::{CliTest, EN_FILE, stderr, stdout};

#[test]
fn test_generate_seeds_new_keys() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"const s = _t("Hello");"#)?;
    test.write_file(EN_FILE, "{}\n")?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Searching for translations in: src,res"));
    assert!(stdout(&output).contains(&format!("Wrote 1 strings to {}", EN_FILE)));

    assert_eq!(test.read_file(EN_FILE)?, "{\n    \"Hello\": \"Hello\"\n}\n");

    Ok(())
}

#[test]
fn test_generate_creates_missing_canonical_file() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"_t("Hello");"#)?;
    test.write_file("src/i18n/strings/.keep", "")?;

    let output = test.run(&["generate"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_json(EN_FILE)?, json!({ "Hello": "Hello" }));

    Ok(())
}

#[test]
fn test_generate_preserves_values_and_drops_unused() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
        export function App() {
            return <p>{_t("Hello")} {_td("Goodbye")}</p>;
        }
        "#,
    )?;
    test.write_file(
        EN_FILE,
        r#"{ "Hello": "Hello there", "Stale": "No longer used" }"#,
    )?;

    let output = test.run(&["generate"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json(EN_FILE)?,
        json!({ "Hello": "Hello there", "Goodbye": "Goodbye" })
    );

    Ok(())
}

#[test]
fn test_generate_nests_keys_and_seeds_plurals() -> Result<()> {
    let test = CliTest::with_file(
        "src/files.ts",
        r#"
        _t("action|save");
        _t("%(count)s files", { count: n });
        "#,
    )?;
    test.write_file(EN_FILE, "{}")?;

    let output = test.run(&["generate"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json(EN_FILE)?,
        json!({
            "action": { "save": "action|save" },
            "%(count)s files": { "one": "%(count)s files", "other": "%(count)s files" }
        })
    );

    Ok(())
}

#[test]
fn test_generate_output_override() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"_t("Hello");"#)?;
    test.write_file(EN_FILE, r#"{ "Hello": "Hi" }"#)?;

    let output = test.run(&["generate", "--output", "out.json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_json("out.json")?, json!({ "Hello": "Hi" }));
    assert_eq!(test.read_json(EN_FILE)?, json!({ "Hello": "Hi" }));

    Ok(())
}

#[test]
fn test_generate_search_path_argument() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"_t("From src");"#)?;
    test.write_file("lib/util.js", r#"_t("From lib");"#)?;
    test.write_file(EN_FILE, "{}")?;

    let output = test.run(&["generate", "lib"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_json(EN_FILE)?, json!({ "From lib": "From lib" }));

    Ok(())
}

#[test]
fn test_generate_invalid_call_aborts() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"_t("Hello %(name)s");"#)?;
    let canonical = r#"{ "Hello %(name)s": "Hello %(name)s" }"#;
    test.write_file(EN_FILE, canonical)?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("invalid-call"), "stdout: {}", out);
    assert!(out.contains("src/app.ts:1:"), "stdout: {}", out);
    assert!(stderr(&output).contains("no translation file was written"));
    assert_eq!(test.read_file(EN_FILE)?, canonical);

    Ok(())
}

#[test]
fn test_generate_parse_error_aborts() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "let x = );")?;
    test.write_file(EN_FILE, "{}")?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("parse-error"));
    assert_eq!(test.read_file(EN_FILE)?, "{}");

    Ok(())
}

#[test]
fn test_generate_nesting_separator_from_env() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"_t("menu.open");"#)?;
    test.write_file(EN_FILE, "{}")?;

    let output = test.command().arg("generate").env("NESTING_KEY", ".").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_json(EN_FILE)?, json!({ "menu": { "open": "menu.open" } }));

    Ok(())
}

#[test]
fn test_generate_reads_non_utf8_sources() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", r#"_t("Hello");"#)?;
    fs::write(test.root().join("src/legacy.js"), b"var s = 'caf\xe9';\n")?;
    test.write_file(EN_FILE, "{}")?;

    let output = test.run(&["generate"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(test.read_json(EN_FILE)?, json!({ "Hello": "Hello" }));

    Ok(())
}
