//! Report formatting and printing utilities.
//!
//! Statements go to stdout grouped by module, issues are shown in
//! cargo-style format. Separate from core logic so extscan can be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary, ScanSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ModuleExtraction;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to a writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    for issue in &sorted {
        print_issue(issue, writer);
    }
}

/// Print the statements of each module that produced any.
pub fn print_statements_to<W: Write>(modules: &[ModuleExtraction], writer: &mut W) {
    for module in modules.iter().filter(|m| !m.statements.is_empty()) {
        let _ = writeln!(writer, "{}", module.file_path.bold());
        for statement in &module.statements {
            let _ = writeln!(writer, "    {}", statement);
        }
        let _ = writeln!(writer);
    }
}

/// Print an aligned per-module statement count table (verbose mode).
pub fn print_module_table_to<W: Write>(modules: &[ModuleExtraction], writer: &mut W) {
    let Some(path_width) = modules
        .iter()
        .map(|m| UnicodeWidthStr::width(m.file_path.as_str()))
        .max()
    else {
        return;
    };

    for module in modules {
        let padding = path_width - UnicodeWidthStr::width(module.file_path.as_str());
        let count = module.statements.len();
        let _ = writeln!(
            writer,
            "  {}{:padding$}  {} {}",
            module.file_path,
            "",
            count.to_string().cyan(),
            if count == 1 { "statement" } else { "statements" },
            padding = padding
        );
    }
    let _ = writeln!(writer);
}

/// Print the closing summary line of a scan.
pub fn print_scan_summary_to<W: Write>(result: &CommandResult, statement_count: usize, writer: &mut W) {
    let files = result.source_files_checked;
    let scanned = format!(
        "Scanned {} source {}, found {} {}",
        files,
        if files == 1 { "file" } else { "files" },
        statement_count,
        if statement_count == 1 { "statement" } else { "statements" }
    );

    let msg = if result.error_count > 0 {
        format!(
            "{} {}, {} {}",
            FAILURE_MARK.red(),
            scanned,
            result.error_count,
            if result.error_count == 1 {
                "file could not be parsed"
            } else {
                "files could not be parsed"
            }
            .red()
        )
    } else if result.warning_count > 0 {
        format!(
            "{} {}, {} {}",
            SUCCESS_MARK.green(),
            scanned.green(),
            result.warning_count,
            if result.warning_count == 1 {
                "deprecated import"
            } else {
                "deprecated imports"
            }
            .yellow()
        )
    } else {
        format!("{} {}", SUCCESS_MARK.green(), scanned.green())
    };
    let _ = writeln!(writer, "{}", msg);
}

// ============================================================
// JSON output
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub modules: Vec<JsonModule<'a>>,
    pub parse_errors: Vec<JsonParseError<'a>>,
    pub statement_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonModule<'a> {
    pub file_path: &'a str,
    pub statements: &'a [String],
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonParseError<'a> {
    pub file_path: &'a str,
    pub error: &'a str,
}

pub fn json_report<'a>(summary: &'a ScanSummary, issues: &'a [Issue]) -> JsonReport<'a> {
    JsonReport {
        modules: summary
            .modules
            .iter()
            .map(|m| JsonModule {
                file_path: &m.file_path,
                statements: &m.statements,
                warnings: m.deprecations.iter().map(ToString::to_string).collect(),
            })
            .collect(),
        parse_errors: issues
            .iter()
            .filter_map(|issue| match issue {
                Issue::ParseError(e) => Some(JsonParseError {
                    file_path: &e.file_path,
                    error: &e.error,
                }),
                Issue::DeprecatedImport(_) => None,
            })
            .collect(),
        statement_count: summary.statement_count,
        manifest_path: summary
            .manifest_path
            .as_ref()
            .map(|p| p.to_string_lossy().replace('\\', "/")),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    match issue.location() {
        ReportLocation::Source(loc) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                loc.file_path,
                loc.line,
                loc.col
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(result, summary, verbose),
        CommandSummary::Extract(summary) => print_extract(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_scan(result: &CommandResult, summary: &ScanSummary, verbose: bool) {
    let stdout = &mut io::stdout().lock();

    if summary.format == OutputFormat::Json {
        match serde_json::to_string_pretty(&json_report(summary, &result.issues)) {
            Ok(json) => {
                let _ = writeln!(stdout, "{}", json);
            }
            Err(e) => eprintln!("{} {}", "error:".bold().red(), e),
        }
        return;
    }

    print_statements_to(&summary.modules, stdout);
    if verbose {
        print_module_table_to(&summary.modules, stdout);
    }
    report_to(&result.issues, stdout);

    if let Some(path) = &summary.manifest_path {
        let _ = writeln!(
            stdout,
            "{} {}",
            "Wrote".green().bold(),
            path.to_string_lossy().replace('\\', "/")
        );
    }
    print_scan_summary_to(result, summary.statement_count, stdout);
}

fn print_extract(summary: &ExtractSummary) {
    for warning in &summary.warnings {
        eprintln!("{} {}", "warning:".bold().yellow(), warning);
    }
    for statement in &summary.statements {
        println!("{}", statement);
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("{} {}", "error:".bold().red(), error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
