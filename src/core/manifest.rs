//! Manifest file rendering.
//!
//! The manifest is a plain script that a Sencha Cmd build scans for
//! `Ext.create(...)` calls. It is never executed.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::extract::ModuleExtraction;

pub const MANIFEST_HEADER: &str = "// Generated by extscan. Do not edit.";

/// One `// <path>` comment per module followed by its statements.
pub fn render_manifest(modules: &[ModuleExtraction]) -> String {
    let mut out = String::from(MANIFEST_HEADER);
    out.push('\n');

    for module in modules.iter().filter(|m| !m.statements.is_empty()) {
        out.push_str(&format!("\n// {}\n", module.file_path));
        for statement in &module.statements {
            out.push_str(statement);
            out.push_str(";\n");
        }
    }
    out
}

pub fn write_manifest(path: &Path, modules: &[ModuleExtraction]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, render_manifest(modules))
        .with_context(|| format!("Failed to write manifest: {}", path.display()))
}
