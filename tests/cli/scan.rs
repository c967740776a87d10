use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"
import { Grid, Panel } from "@extjs/ext-react";

export default function App() {
    return (
        <Panel title="Orders">
            <Grid store={store} />
        </Panel>
    );
}
"#;

#[test]
fn test_scan_prints_statements_per_module() -> Result<()> {
    let test = CliTest::with_file("src/App.js", APP)?;

    assert_cmd_snapshot!(test.scan_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    src/App.js
        Ext.create({"xtype": "panel", title: "Orders"})
        Ext.create({"xtype": "grid", store: store})
        Ext.create({"xtype": "grid"})
        Ext.create({"xtype": "panel"})

    ✓ Scanned 1 source file, found 4 statements

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_scan_reports_deprecated_import() -> Result<()> {
    let test = CliTest::with_file(
        "src/Legacy.js",
        r#"import { Button } from "@extjs/reactor/modern";"#,
    )?;

    assert_cmd_snapshot!(test.scan_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    src/Legacy.js
        Ext.create({"xtype": "button"})

    warning: @extjs/reactor/modern is deprecated  deprecated-import
      --> src/Legacy.js:1:1
       = hint: import from @extjs/ext-react instead

    ✓ Scanned 1 source file, found 1 statement, 1 deprecated import

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_scan_parse_error_exits_with_failure() -> Result<()> {
    let test = CliTest::with_file("src/App.js", APP)?;
    test.write_file("src/Broken.js", "const = ;")?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: Failed to parse src/Broken.js"));
    assert!(out.contains("  --> src/Broken.js\n"));
    assert!(out.contains("Scanned 2 source files, found 4 statements, 1 file could not be parsed"));
    Ok(())
}

#[test]
fn test_scan_json_format() -> Result<()> {
    let test = CliTest::with_file("src/App.js", APP)?;
    test.write_file(
        "src/Legacy.js",
        r#"import { Button } from "@extjs/reactor/modern";"#,
    )?;

    let output = test.scan_command().args(["--format", "json"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["statementCount"], 5);
    assert_eq!(json["modules"][0]["filePath"], "src/App.js");
    assert_eq!(json["modules"][1]["filePath"], "src/Legacy.js");
    assert_eq!(
        json["modules"][1]["warnings"][0],
        "src/Legacy.js: @extjs/reactor/modern is deprecated, use @extjs/ext-react instead."
    );
    assert_eq!(json["parseErrors"], Value::Array(Vec::new()));
    Ok(())
}

#[test]
fn test_scan_writes_manifest() -> Result<()> {
    let test = CliTest::with_file("src/App.js", APP)?;
    test.write_file("src/util.js", "export const add = (a, b) => a + b;")?;

    let mut cmd = test.scan_command();
    cmd.args(["--output", "build/ext-manifest.js"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    src/App.js
        Ext.create({"xtype": "panel", title: "Orders"})
        Ext.create({"xtype": "grid", store: store})
        Ext.create({"xtype": "grid"})
        Ext.create({"xtype": "panel"})

    Wrote build/ext-manifest.js
    ✓ Scanned 2 source files, found 4 statements

    ----- stderr -----
    "#);

    insta::assert_snapshot!(test.read_file("build/ext-manifest.js")?, @r#"
    // Generated by extscan. Do not edit.

    // src/App.js
    Ext.create({"xtype": "panel", title: "Orders"});
    Ext.create({"xtype": "grid", store: store});
    Ext.create({"xtype": "grid"});
    Ext.create({"xtype": "panel"});
    "#);
    Ok(())
}

#[test]
fn test_scan_uses_config_includes_and_output() -> Result<()> {
    let test = CliTest::with_file("app/views/Main.jsx", APP)?;
    test.write_file("src/Ignored.js", APP)?;
    test.write_file(
        ".extscanrc.json",
        r#"{ "includes": ["app"], "ignores": ["**/legacy/**"], "output": "ext.js" }"#,
    )?;
    test.write_file("app/legacy/Old.js", APP)?;

    let output = test.scan_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let manifest = test.read_file("ext.js")?;
    assert!(manifest.contains("// app/views/Main.jsx\n"));
    assert!(!manifest.contains("Ignored"));
    assert!(!manifest.contains("legacy"));
    Ok(())
}

#[test]
fn test_scan_skips_test_files_by_default() -> Result<()> {
    let test = CliTest::with_file("src/App.js", APP)?;
    test.write_file("src/App.test.js", APP)?;

    let output = test.scan_command().output()?;
    assert!(stdout(&output).contains("Scanned 1 source file"));
    Ok(())
}

#[test]
fn test_scan_source_root_argument() -> Result<()> {
    let test = CliTest::with_file("web/src/App.js", APP)?;

    let mut cmd = test.scan_command();
    cmd.args(["--source-root", "web"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    src/App.js
        Ext.create({"xtype": "panel", title: "Orders"})
        Ext.create({"xtype": "grid", store: store})
        Ext.create({"xtype": "grid"})
        Ext.create({"xtype": "panel"})

    ✓ Scanned 1 source file, found 4 statements

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_scan_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".extscanrc.json", "{ not json")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    Ok(())
}
