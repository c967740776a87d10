use extscan::mcp::{ExtscanMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ExtscanMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["includes"], json!(["src"]));
    assert_eq!(json_result["config"]["sourceRoot"], "./");
    assert_eq!(json_result["config"]["ignoreTestFiles"], true);
    assert!(json_result["config"]["output"].is_null());
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "includes": ["app"],
            "ignores": ["**/vendor/**"],
            "output": "build/ext.js"
        }))
        .unwrap();

    let server = ExtscanMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["includes"], json!(["app"]));
    assert_eq!(json_result["config"]["ignores"], json!(["**/vendor/**"]));
    assert_eq!(json_result["config"]["output"], "build/ext.js");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".extscanrc.json", "{ broken").unwrap();

    let server = ExtscanMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
    assert!(fixture.root_path().join(".extscanrc.json").exists());
}
