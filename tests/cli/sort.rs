use anyhow::Result;

use crate::{CliTest, EN_FILE, stderr, stdout};

#[test]
fn test_sort_rewrites_unsorted_file() -> Result<()> {
    let test = CliTest::with_file(EN_FILE, r#"{ "b": "B", "a": { "y": "Y", "x": "X" } }"#)?;

    let output = test.run(&["sort"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(&format!("Sorted {}", EN_FILE)));
    assert_eq!(
        test.read_file(EN_FILE)?,
        "{\n    \"a\": {\n        \"x\": \"X\",\n        \"y\": \"Y\"\n    },\n    \"b\": \"B\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_sort_already_sorted() -> Result<()> {
    let content = "{\n    \"a\": \"A\",\n    \"b\": \"B\"\n}\n";
    let test = CliTest::with_file(EN_FILE, content)?;

    let output = test.run(&["sort"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("is already sorted"));
    assert_eq!(test.read_file(EN_FILE)?, content);

    Ok(())
}

#[test]
fn test_sort_explicit_file() -> Result<()> {
    let test = CliTest::with_file("de.json", r#"{ "z": "Z", "a": "A" }"#)?;

    let output = test.run(&["sort", "de.json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("de.json")?,
        "{\n    \"a\": \"A\",\n    \"z\": \"Z\"\n}\n"
    );

    Ok(())
}
