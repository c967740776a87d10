use extscan::mcp::{ExtscanMcpServer, types::ExtractSourceParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::extract_tool_result_json;

fn params(source: &str) -> Parameters<ExtractSourceParams> {
    Parameters(ExtractSourceParams {
        source: source.to_string(),
        resource_path: "/app/src/View.js".to_string(),
    })
}

// ============================================================================
// extract_source tests
// ============================================================================

#[tokio::test]
async fn test_extract_source_create_element() {
    let server = ExtscanMcpServer::new();

    let result = server
        .extract_source(params(
            r#"
            import { Grid } from "@extjs/ext-react";
            React.createElement(Grid, { title: "Orders" });
            "#,
        ))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result,
        json!({
            "statements": [
                "Ext.create({\"xtype\": \"grid\", title: \"Orders\"})",
                "Ext.create({\"xtype\": \"grid\"})"
            ],
            "warnings": []
        })
    );
}

#[tokio::test]
async fn test_extract_source_deprecated_import_warns() {
    let server = ExtscanMcpServer::new();

    let result = server
        .extract_source(params(r#"import { Panel } from "@extjs/reactor/modern";"#))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["statements"], json!(["Ext.create({\"xtype\": \"panel\"})"]));
    assert_eq!(
        json_result["warnings"],
        json!(["/app/src/View.js: @extjs/reactor/modern is deprecated, use @extjs/ext-react instead."])
    );
}

#[tokio::test]
async fn test_extract_source_parse_error() {
    let server = ExtscanMcpServer::new();

    let result = server.extract_source(params("const = ;")).await;

    let err = result.unwrap_err();
    assert!(err.message.contains("Failed to parse /app/src/View.js"));
}
