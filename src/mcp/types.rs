use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::ModuleExtraction;
use crate::issues::ParseErrorIssue;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSourceParams {
    /// Module source text (JavaScript, JSX or TypeScript)
    pub source: String,
    /// Resource path of the module, used in deprecation warnings
    pub resource_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanProjectParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

// ============================================================
// Extract Types (extract_source)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractSourceResult {
    /// `Ext.create(...)` statements in emission order
    pub statements: Vec<String>,
    /// Deprecation warnings for the module
    pub warnings: Vec<String>,
}

// ============================================================
// Scan Types (scan_project)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanProjectResult {
    pub file_count: usize,
    pub statement_count: usize,
    /// Modules with at least one statement or warning, sorted by path
    pub modules: Vec<ModuleItem>,
    pub parse_errors: Vec<ParseErrorItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleItem {
    pub file_path: String,
    pub statements: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<ModuleExtraction> for ModuleItem {
    fn from(m: ModuleExtraction) -> Self {
        Self {
            warnings: m.deprecations.iter().map(ToString::to_string).collect(),
            file_path: m.file_path,
            statements: m.statements,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorItem {
    pub file_path: String,
    pub error: String,
}

impl From<ParseErrorIssue> for ParseErrorItem {
    fn from(e: ParseErrorIssue) -> Self {
        Self {
            file_path: e.file_path,
            error: e.error,
        }
    }
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub ignore_test_files: bool,
    pub source_root: String,
    pub output: Option<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            includes: c.includes,
            ignore_test_files: c.ignore_test_files,
            source_root: c.source_root,
            output: c.output,
        }
    }
}
