//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `parsers`: Module source to AST (swc)
//! - `collect`: Per-module symbol tables (factory aliases, package bindings, type registry)
//! - `extract`: The usage scanner and statement synthesis
//! - `utils`: Fixed module-name patterns
//! - `file_scanner`: Source file discovery for project scans
//! - `context`: Project scan orchestration (config, files, parallel extraction)
//! - `manifest`: Manifest file rendering

pub mod collect;
pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod manifest;
pub mod parsers;
pub mod utils;

pub use context::{ScanContext, ScanOutcome};
pub use extract::{ModuleExtraction, ModuleInfo, extract_from_jsx, extract_module};
