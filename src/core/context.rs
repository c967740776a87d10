use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        extract::{ModuleExtraction, extract_module},
        file_scanner::scan_files,
    },
    issues::{Issue, ParseErrorIssue},
};

/// Output of extracting every module in a project.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Successfully scanned modules, sorted by path.
    pub modules: Vec<ModuleExtraction>,
    /// Modules that could not be read or parsed.
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl ScanOutcome {
    pub fn statement_count(&self) -> usize {
        self.modules.iter().map(|m| m.statements.len()).sum()
    }

    /// Deprecations and parse errors as reportable issues.
    pub fn issues(&self) -> Vec<Issue> {
        let deprecations = self
            .modules
            .iter()
            .flat_map(|m| m.deprecations.iter().cloned().map(Issue::DeprecatedImport));
        let parse_errors = self.parse_errors.iter().cloned().map(Issue::ParseError);

        let mut issues: Vec<Issue> = deprecations.chain(parse_errors).collect();
        issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        issues
    }
}

/// Project scan orchestration.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--source-root`)
/// 2. `.extscanrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration.
    pub config: Config,
    /// Directory that module paths are reported relative to.
    pub root_dir: PathBuf,
    /// Module files to extract, sorted.
    pub files: Vec<PathBuf>,
    pub verbose: bool,
}

impl ScanContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // The config file is searched from the CLI source root, or the current directory.
        let search_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let loaded = load_config(&search_dir)?;

        let root_dir = match &common_args.source_root {
            Some(root) => root.clone(),
            None => PathBuf::from(&loaded.config.source_root),
        };

        let scan = scan_files(
            &root_dir,
            &loaded.config.includes,
            &loaded.config.ignores,
            loaded.config.ignore_test_files,
            verbose,
        );

        if verbose {
            eprintln!(
                "{} {} module(s) under {} ({} unreadable entries skipped)",
                "scanning:".bold().cyan(),
                scan.files.len(),
                root_dir.display(),
                scan.skipped_count
            );
        }

        Ok(Self {
            config: loaded.config,
            root_dir,
            files: scan.files.into_iter().collect(),
            verbose,
        })
    }

    /// Path of `path` relative to the scan root, with `/` separators.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Extract every module in parallel. Each module gets its own symbol tables;
    /// only the source map is shared.
    pub fn extract_all(&self) -> ScanOutcome {
        let source_map: Arc<SourceMap> = Arc::default();

        let results: Vec<Result<ModuleExtraction, ParseErrorIssue>> = self
            .files
            .par_iter()
            .map(|path| {
                let file_path = self.display_path(path);
                let code = fs::read_to_string(path).map_err(|e| ParseErrorIssue {
                    file_path: file_path.clone(),
                    error: format!("Failed to read file: {}", e),
                })?;
                extract_module(code, &file_path, Arc::clone(&source_map)).map_err(|e| {
                    ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: e.to_string(),
                    }
                })
            })
            .collect();

        let mut outcome = ScanOutcome::default();
        for result in results {
            match result {
                Ok(module) => outcome.modules.push(module),
                Err(issue) => {
                    if self.verbose {
                        eprintln!("{} {}", "error:".bold().red(), issue.error);
                    }
                    outcome.parse_errors.push(issue);
                }
            }
        }
        outcome
    }
}
