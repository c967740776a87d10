use std::path::PathBuf;

use anyhow::Result;

use super::{CommandResult, CommandSummary, ScanSummary, helper::finish};
use crate::{
    cli::args::ScanCommand,
    core::{ScanContext, manifest::write_manifest},
};

/// Scan the project and optionally write the manifest.
///
/// The manifest path comes from `--output`, falling back to the config
/// `output` (relative to the source root). Modules that fail to parse are
/// left out of the manifest and reported as errors.
pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let outcome = ctx.extract_all();

    let manifest_path: Option<PathBuf> = cmd.output.or_else(|| {
        ctx.config
            .output
            .as_ref()
            .map(|output| ctx.root_dir.join(output))
    });

    if let Some(path) = &manifest_path {
        write_manifest(path, &outcome.modules)?;
    }

    let issues = outcome.issues();
    let statement_count = outcome.statement_count();

    Ok(finish(
        CommandSummary::Scan(ScanSummary {
            format: cmd.format,
            modules: outcome.modules,
            statement_count,
            manifest_path,
        }),
        issues,
        ctx.files.len(),
    ))
}
