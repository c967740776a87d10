use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_extract_prints_statements() -> Result<()> {
    let test = CliTest::with_file(
        "App.js",
        r#"
        import { reactify } from "@extjs/reactor";
        const [Grid, Custom] = reactify("grid", CustomClass);
        React.createElement(Grid, { foo: 1 });
        "#,
    )?;

    assert_cmd_snapshot!(test.extract_command("App.js"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Ext.create({"xtype": "grid", foo: 1})
    Ext.create({"xtype": "grid"})
    Ext.create({"xclass": "CustomClass"})

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_extract_warns_on_stderr() -> Result<()> {
    let test = CliTest::with_file(
        "Legacy.js",
        r#"import { Grid } from "@extjs/reactor/modern";"#,
    )?;

    let mut cmd = test.extract_command("Legacy.js");
    cmd.args(["--resource", "/app/src/Legacy.js"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Ext.create({"xtype": "grid"})

    ----- stderr -----
    warning: /app/src/Legacy.js: @extjs/reactor/modern is deprecated, use @extjs/ext-react instead.
    "#);
    Ok(())
}

#[test]
fn test_extract_module_without_components() -> Result<()> {
    let test = CliTest::with_file("util.js", "export const add = (a, b) => a + b;")?;

    assert_cmd_snapshot!(test.extract_command("util.js"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_extract_parse_error_is_fatal() -> Result<()> {
    let test = CliTest::with_file("Broken.js", "const = ;")?;

    let output = test.extract_command("Broken.js").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("Error: Failed to parse Broken.js:1:"));
    Ok(())
}

#[test]
fn test_extract_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command("Nope.js").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read Nope.js"));
    Ok(())
}
