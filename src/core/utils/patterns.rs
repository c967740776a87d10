//! Module-name patterns recognized by the extractor.
//!
//! These are fixed, not configurable. The current family covers
//! `@extjs/ext-react*` plus the `@extjs/reactor/classic` and
//! `@extjs/reactor/modern` sub-paths; the legacy `@extjs/reactor/modern`
//! path is still honored but reported as deprecated.

use std::sync::LazyLock;

use regex::Regex;

/// Module that exports the factory function.
pub const FACTORY_MODULE: &str = "@extjs/reactor";

/// Canonical export name of the factory function.
pub const FACTORY_EXPORT: &str = "reactify";

/// Package suggested in deprecation notices.
pub const REPLACEMENT_MODULE: &str = "@extjs/ext-react";

static DEPRECATED_MODULE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@extjs/reactor/modern$").unwrap());

static COMPONENT_MODULE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@extjs/(ext-react.*|reactor/(classic|modern))$").unwrap());

/// How an import source relates to the component packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleMatch {
    /// Not a component package.
    Unmatched,
    /// A current component package.
    Current,
    /// The legacy path; still registered, but a deprecation notice is due.
    Deprecated,
}

impl ModuleMatch {
    pub fn is_match(self) -> bool {
        !matches!(self, ModuleMatch::Unmatched)
    }
}

/// Classify an import source string.
pub fn match_component_module(source: &str) -> ModuleMatch {
    if DEPRECATED_MODULE_REGEX.is_match(source) {
        ModuleMatch::Deprecated
    } else if COMPONENT_MODULE_REGEX.is_match(source) {
        ModuleMatch::Current
    } else {
        ModuleMatch::Unmatched
    }
}

/// Whether `source` names a package whose `require(...)` result exposes components.
pub fn is_component_package(source: &str) -> bool {
    COMPONENT_MODULE_REGEX.is_match(source)
}

pub fn is_factory_module(source: &str) -> bool {
    source == FACTORY_MODULE
}

/// Derive a tag from an exported component name: `Grid_Panel` becomes `grid-panel`.
pub fn tag_from_export_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}
