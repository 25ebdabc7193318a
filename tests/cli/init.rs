use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .documentorrc.json (marker: documentor)"));
    assert!(test.root().join(".documentorrc.json").exists());

    let content = test.read_file(".documentorrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["marker"], "documentor");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".documentorrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".documentorrc.json already exists"));
    assert_eq!(test.read_file(".documentorrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("t.txt", "[@documentor ignore]")?;

    let output = test.inspect_command().arg("t.txt").output()?;
    assert!(
        output.status.success(),
        "Inspect should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("= ignored: yes"));

    Ok(())
}

#[test]
fn test_init_writes_marker_flag() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["init", "--marker", "doc"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("(marker: doc)"));
    let parsed: Value = serde_json::from_str(&test.read_file(".documentorrc.json")?)?;
    assert_eq!(parsed["marker"], "doc");

    test.write_file("t.txt", "[@doc ignore] [@documentor include-ref x]")?;
    let output = test.inspect_command().arg("t.txt").output()?;
    let out = stdout(&output);
    assert!(out.contains("= ignored: yes"));
    assert!(out.contains("= include refs: -"));

    Ok(())
}

#[test]
fn test_init_rejects_invalid_marker() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["init", "--marker", "two words"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid --marker value"));
    assert!(!test.root().join(".documentorrc.json").exists());

    Ok(())
}
