use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_stdin, stderr, stdout};

#[test]
fn test_strip_file() -> Result<()> {
    let test = CliTest::with_file(
        "orders.txt",
        "Orders placed by customers.\n[@documentor include-ref table:public.customers]\nPartitioned by month. [@documentor ignore]\n",
    )?;

    let output = test.strip_command().arg("orders.txt").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Orders placed by customers.\n\nPartitioned by month. \n"
    );

    Ok(())
}

#[test]
fn test_strip_without_directives_is_unchanged() -> Result<()> {
    let text = "  Plain text, [brackets] and @mentions stay.\n";
    let test = CliTest::with_file("plain.txt", text)?;

    let output = test.strip_command().arg("plain.txt").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), text);

    Ok(())
}

#[test]
fn test_strip_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = run_with_stdin(test.strip_command(), "Table docs. [@documentor ignore] end")?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Table docs.  end");

    Ok(())
}

#[test]
fn test_strip_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("t.txt", "[[@documentor a]@documentor b] tail")?;

    let first = test.strip_command().arg("t.txt").output()?;
    assert_eq!(stdout(&first), " tail");

    test.write_file("t.txt", &stdout(&first))?;
    let second = test.strip_command().arg("t.txt").output()?;
    assert_eq!(stdout(&second), " tail");

    Ok(())
}

#[test]
fn test_strip_custom_marker() -> Result<()> {
    let test = CliTest::with_file("t.txt", "a [@doc ignore] b [@documentor ignore]")?;

    let output = test
        .strip_command()
        .args(["t.txt", "--marker", "doc"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "a  b [@documentor ignore]");

    Ok(())
}

#[test]
fn test_strip_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.strip_command().arg("missing.txt").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read file"));

    Ok(())
}
