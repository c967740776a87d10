//! Usage extraction: from one module's source to its creation statements.
//!
//! ## Module Structure
//!
//! - `scanner`: The single-pass visitor that resolves element-creation sites
//! - `props`: Converts call arguments and JSX attributes into object properties
//! - `statement`: Object-literal model and `Ext.create(...)` synthesis

pub mod props;
pub mod scanner;
pub mod statement;

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;
use swc_ecma_visit::VisitWith;

use crate::core::parsers::jsx::parse_jsx_source;
use crate::issues::DeprecatedImportIssue;

pub use scanner::UsageScanner;
pub use statement::{CREATE_CALLEE, ObjectEntry, ObjectLiteral, finalize, synthesize};

/// Everything extracted from one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleExtraction {
    pub file_path: String,
    /// Use-site statements in traversal order, then one per registered type.
    /// May contain duplicates.
    pub statements: Vec<String>,
    pub deprecations: Vec<DeprecatedImportIssue>,
}

/// Describes the module being extracted; the resource path only appears in warnings.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    pub resource: String,
}

impl ModuleInfo {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

/// Parse and scan one module.
///
/// Fails only when the source does not parse; no partial results are returned.
pub fn extract_module(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ModuleExtraction> {
    let parsed = parse_jsx_source(code, file_path, source_map)?;

    let mut scanner = UsageScanner::new(file_path, &parsed.source_map);
    parsed.module.visit_with(&mut scanner);

    Ok(scanner.finish())
}

/// Extract the creation statements of one module.
///
/// Deprecation notices are appended to `warnings` as
/// `<resource>: <module> is deprecated, use @extjs/ext-react instead.`
pub fn extract_from_jsx(
    source: &str,
    module: &ModuleInfo,
    warnings: &mut Vec<String>,
) -> Result<Vec<String>> {
    let extraction = extract_module(source.to_string(), &module.resource, Arc::default())?;

    warnings.extend(extraction.deprecations.iter().map(ToString::to_string));
    Ok(extraction.statements)
}
