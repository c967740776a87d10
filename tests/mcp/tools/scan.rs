use extscan::mcp::{ExtscanMcpServer, types::ScanProjectParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_mixed_project};

// ============================================================================
// scan_project tests
// ============================================================================

#[tokio::test]
async fn test_scan_project_mixed() {
    let fixture = fixture_mixed_project().unwrap();
    let server = ExtscanMcpServer::new();

    let params = Parameters(ScanProjectParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_project(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fileCount"], 4);
    assert_eq!(json_result["statementCount"], 5);

    // util.js has nothing to report
    let modules = json_result["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 2);

    assert_eq!(modules[0]["filePath"], "src/App.jsx");
    assert_eq!(
        modules[0]["statements"],
        json!([
            "Ext.create({\"xtype\": \"container\", layout: \"vbox\"})",
            "Ext.create({\"xtype\": \"button\", text: \"Save\"})",
            "Ext.create({\"xtype\": \"container\"})",
            "Ext.create({\"xtype\": \"button\"})"
        ])
    );

    assert_eq!(modules[1]["filePath"], "src/legacy/Chart.js");
    assert_eq!(
        modules[1]["warnings"],
        json!(["src/legacy/Chart.js: @extjs/reactor/modern is deprecated, use @extjs/ext-react instead."])
    );

    let parse_errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(parse_errors.len(), 1);
    assert_eq!(parse_errors[0]["filePath"], "src/Broken.js");
}

#[tokio::test]
async fn test_scan_project_respects_config_ignores() {
    let fixture = fixture_mixed_project().unwrap();
    fixture
        .write_config(&json!({ "ignores": ["src/legacy", "**/Broken.js"] }))
        .unwrap();
    let server = ExtscanMcpServer::new();

    let params = Parameters(ScanProjectParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_project(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fileCount"], 2);
    assert_eq!(json_result["statementCount"], 4);
    assert_eq!(json_result["parseErrors"], json!([]));
}

#[tokio::test]
async fn test_scan_project_empty() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ExtscanMcpServer::new();

    let params = Parameters(ScanProjectParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_project(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fileCount"], 0);
    assert_eq!(json_result["modules"], json!([]));
}
