use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::CommonArgs,
    config::load_config,
    core::{ModuleInfo, ScanContext, extract_from_jsx},
};

use super::types::{
    ConfigDto, ConfigValues, ExtractSourceParams, ExtractSourceResult, GetConfigParams,
    ModuleItem, ScanProjectParams, ScanProjectResult,
};

#[derive(Clone)]
pub struct ExtscanMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for ExtscanMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl ExtscanMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Extract creation statements from one module's source text
    #[tool(
        description = "Extract Ext.create(...) statements from the source text of one JavaScript/JSX module. Returns statements in emission order plus deprecation warnings."
    )]
    pub async fn extract_source(
        &self,
        params: Parameters<ExtractSourceParams>,
    ) -> Result<CallToolResult, McpError> {
        let ExtractSourceParams {
            source,
            resource_path,
        } = params.0;

        let mut warnings = Vec::new();
        let statements = extract_from_jsx(&source, &ModuleInfo::new(resource_path), &mut warnings)
            .map_err(|e| McpError::invalid_params(format!("{:#}", e), None))?;

        json_result(&ExtractSourceResult {
            statements,
            warnings,
        })
    }

    /// Scan every module of a project
    #[tool(
        description = "Scan every JavaScript/JSX module under the project's source root and return per-file Ext.create(...) statements, deprecation warnings and parse errors."
    )]
    pub async fn scan_project(
        &self,
        params: Parameters<ScanProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = PathBuf::from(&params.0.project_root_path);

        let ctx = ScanContext::new(&CommonArgs {
            source_root: Some(root),
            verbose: false,
        })
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;

        let outcome = ctx.extract_all();
        let statement_count = outcome.statement_count();

        let result = ScanProjectResult {
            file_count: ctx.files.len(),
            statement_count,
            modules: outcome
                .modules
                .into_iter()
                .filter(|m| !m.statements.is_empty() || !m.deprecations.is_empty())
                .map(ModuleItem::from)
                .collect(),
            parse_errors: outcome.parse_errors.into_iter().map(Into::into).collect(),
        };

        json_result(&result)
    }

    /// Get the current extscan configuration
    #[tool(description = "Get the effective extscan configuration for a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for ExtscanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Extscan MCP finds the Ext JS components a React application instantiates.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_project - Extract Ext.create statements from every module in the project\n\
                 3. extract_source - Extract Ext.create statements from one module's source text\n\n\
                 Deprecation warnings point at imports from @extjs/reactor/modern; \
                 replace them with @extjs/ext-react."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = ExtscanMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
