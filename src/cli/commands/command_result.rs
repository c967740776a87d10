use std::path::PathBuf;

use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::{core::ModuleExtraction, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub format: OutputFormat,
    /// Modules that parsed, sorted by path.
    pub modules: Vec<ModuleExtraction>,
    pub statement_count: usize,
    /// Where the manifest was written, if one was requested.
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub statements: Vec<String>,
    /// Deprecation notices, already formatted.
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running extscan commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Deprecations and parse errors, sorted.
    pub issues: Vec<Issue>,
    /// Number of module files that were scanned.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
