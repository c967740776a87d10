use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExtractSummary, helper::finish};
use crate::{
    cli::args::ExtractCommand,
    core::{ModuleInfo, extract_from_jsx},
};

/// Extract one module. A parse failure is an error, not an issue: there is nothing to report.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let source = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;

    let resource = cmd
        .resource
        .unwrap_or_else(|| cmd.file.to_string_lossy().replace('\\', "/"));
    let module = ModuleInfo::new(resource);

    let mut warnings = Vec::new();
    let statements = extract_from_jsx(&source, &module, &mut warnings)?;

    Ok(finish(
        CommandSummary::Extract(ExtractSummary {
            statements,
            warnings,
        }),
        Vec::new(),
        1,
    ))
}
