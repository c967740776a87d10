use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

use crate::config::TEST_FILE_PATTERNS;

/// Directories never worth descending into.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Module files, sorted.
    pub files: BTreeSet<PathBuf>,
    /// Entries that could not be read.
    pub skipped_count: usize,
}

/// Paths excluded from a scan: literal prefixes plus glob patterns.
struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignores: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut patterns = Vec::new();

        for p in ignores {
            if !is_glob_pattern(p) {
                prefixes.push(base_dir.join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) if verbose => eprintln!(
                    "{} Invalid ignore pattern '{}': {}",
                    "warning:".bold().yellow(),
                    p,
                    e
                ),
                Err(_) => {}
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, patterns }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self.patterns.iter().any(|p| p.matches_path(path))
    }
}

/// Directories to walk: each include resolved against `base_dir`, or `base_dir` itself.
fn scan_roots(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let full = base_dir.join(inc);
        if is_glob_pattern(inc) {
            match glob(&full.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten().filter(|p| p.is_dir())),
                Err(e) if verbose => eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    "warning:".bold().yellow(),
                    inc,
                    e
                ),
                Err(_) => {}
            }
        } else if full.exists() {
            roots.push(full);
        } else if verbose {
            eprintln!(
                "{} Include path does not exist: {}",
                "warning:".bold().yellow(),
                full.display()
            );
        }
    }
    roots
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Collect `.js/.jsx/.ts/.tsx` modules under the included directories.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let ignore_set = IgnoreSet::new(base_dir, ignore_patterns, ignore_test_files, verbose);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base_dir, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_module_file(path) && !ignore_set.is_ignored(path)
            {
                files.insert(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_module_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("js" | "jsx" | "ts" | "tsx" | "mjs")
    ) && !path.to_string_lossy().ends_with(".d.ts")
}
