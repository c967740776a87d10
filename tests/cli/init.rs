use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .extscanrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".extscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["includes"], serde_json::json!(["src"]));
    assert_eq!(parsed["ignoreTestFiles"], true);
    assert!(parsed.get("output").is_none());
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".extscanrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .extscanrc.json already exists
    ");
    assert_eq!(test.read_file(".extscanrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "src/App.jsx",
        r#"
        import { Button } from "@extjs/ext-react";
        export const App = () => <Button text="Go" />;
        "#,
    )?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join(".extscanrc.json").exists());
    assert!(stdout(&output).contains("Ext.create({\"xtype\": \"button\", text: \"Go\"})"));
    Ok(())
}
