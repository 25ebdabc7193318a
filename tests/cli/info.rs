use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_info_with_configured_resources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".documentorrc.json", r#"{ "resourcesDir": "share" }"#)?;
    test.write_file("share/documentor.gitversion", "9c1e4d2\n")?;
    test.write_file("share/README.documentor.md", "# Documentor\n\nDirective reference.\n")?;

    let output = test.command().args(["info", "--readme"]).output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(&format!("version: {}\n", env!("CARGO_PKG_VERSION"))));
    assert!(out.contains("git version: 9c1e4d2\n"));
    assert!(out.contains("marker: documentor\n"));
    assert!(out.contains("# Documentor\n\nDirective reference.\n"));

    Ok(())
}

#[test]
fn test_info_falls_back_when_resources_missing() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["info", "--readme", "--resources-dir", "nowhere"])
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("git version: <No git version information available>\n"));
    assert!(out.contains("Readme is not available\n"));

    Ok(())
}

#[test]
fn test_info_without_readme_flag() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["info", "--resources-dir", "nowhere"])
        .output()?;

    assert!(output.status.success());
    assert!(!stdout(&output).contains("Readme is not available"));

    Ok(())
}
