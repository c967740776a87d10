//! Issue types reported alongside extraction results.
//!
//! Extraction never fails because of an unrecognized construct, so the only
//! things worth reporting are deprecated import paths (advisory) and modules
//! that could not be parsed at all.

use std::fmt;

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DeprecatedImport,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::DeprecatedImport => write!(f, "deprecated-import"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A position in a source file (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

/// Import from a package path that still works but has a replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedImportIssue {
    pub location: SourceLocation,
    /// The deprecated module specifier, e.g. `@extjs/reactor/modern`.
    pub module: String,
    /// The package to use instead.
    pub replacement: String,
}

impl DeprecatedImportIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DeprecatedImport
    }
}

/// Same text a bundler warning channel would receive.
impl fmt::Display for DeprecatedImportIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} is deprecated, use {} instead.",
            self.location.file_path, self.module, self.replacement
        )
    }
}

/// Source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while scanning modules.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    DeprecatedImport(DeprecatedImportIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DeprecatedImport(_) => DeprecatedImportIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::DeprecatedImport(_) => DeprecatedImportIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            Issue::DeprecatedImport(issue) => &issue.location.file_path,
            Issue::ParseError(issue) => &issue.file_path,
        }
    }

    /// Sort by file, then line, then rule.
    pub fn sort_key(&self) -> (&str, usize, usize, Rule) {
        match self {
            Issue::DeprecatedImport(issue) => (
                &issue.location.file_path,
                issue.location.line,
                issue.location.col,
                self.rule(),
            ),
            Issue::ParseError(issue) => (&issue.file_path, 0, 0, self.rule()),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Position inside a source file.
    Source(&'a SourceLocation),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

impl Report for DeprecatedImportIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.location)
    }

    fn message(&self) -> String {
        format!("{} is deprecated", self.module)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!("import from {} instead", self.replacement))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
