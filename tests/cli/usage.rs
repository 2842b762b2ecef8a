use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

fn setup() -> Result<CliTest> {
    let test = CliTest::with_file("src/a.ts", r#"_t("Save"); _t("Cancel");"#)?;
    test.write_file("src/b.ts", r#"_t("Save"); _t("Save");"#)?;
    Ok(test)
}

#[test]
fn test_usage_counts() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["usage"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
    3  Save
    1  Cancel
    ");

    Ok(())
}

#[test]
fn test_usage_consumers_of_key() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["usage", "Cancel"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r#"
    Consumers of "Cancel":
      src/a.ts
    "#);

    Ok(())
}

#[test]
fn test_usage_unknown_key() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["usage", "Nope"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("(no usages found)"));

    Ok(())
}

#[test]
fn test_usage_path_option() -> Result<()> {
    let test = setup()?;
    test.write_file("lib/c.js", r#"_t("Other");"#)?;

    let output = test.run(&["usage", "--path", "lib"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1  Other\n");

    Ok(())
}
