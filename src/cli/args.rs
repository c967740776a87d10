//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract creation statements from every module in a project
//! - `extract`: Extract creation statements from a single module
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Extract(_)) | Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by project-level commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format for the extracted statements
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write a manifest file with all statements (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Module to extract from
    pub file: PathBuf,

    /// Resource path used in warnings (defaults to FILE)
    #[arg(long)]
    pub resource: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract Ext.create statements from every module under the source root
    Scan(ScanCommand),
    /// Extract Ext.create statements from a single module
    Extract(ExtractCommand),
    /// Initialize a new .extscanrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
