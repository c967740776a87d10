//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: command handlers producing a `CommandResult`
//! - `report`: printing of results (text or JSON)

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, OutputFormat};
pub use commands::{CommandResult, CommandSummary};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status().into())
}
