//! Type registry: local identifiers that denote Ext JS components.

use std::collections::HashMap;

use swc_common::{SourceMap, Spanned};
use swc_ecma_ast::{CallExpr, ImportDecl, ImportSpecifier, Pat};

use crate::core::collect::helpers::{
    binding_name, imported_name, positional_arg, source_text, string_literal,
};
use crate::core::utils::{ModuleMatch, match_component_module, tag_from_export_name};

/// Inferred identity of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Short tag name, e.g. `grid`.
    Tag(String),
    /// Source text of a class expression, e.g. `Ext.grid.Grid`.
    Class(String),
}

impl TypeDescriptor {
    /// Config key used in a creation statement.
    pub fn key(&self) -> &'static str {
        match self {
            TypeDescriptor::Tag(_) => "xtype",
            TypeDescriptor::Class(_) => "xclass",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            TypeDescriptor::Tag(tag) => tag,
            TypeDescriptor::Class(expr) => expr,
        }
    }
}

/// Ordered map of local identifier to descriptor.
///
/// Re-registering a name replaces its descriptor but keeps the position of
/// the first registration, so iteration order is the order in which names
/// were first declared.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: Vec<(String, TypeDescriptor)>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, descriptor: TypeDescriptor) {
        match self.index.get(&name) {
            Some(&position) => self.entries[position].1 = descriptor,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, descriptor));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register named imports from a component package.
    ///
    /// `import { Grid, Pivot_Grid as PG } from '@extjs/ext-react'` registers
    /// `Grid -> grid` and `PG -> pivot-grid`. Default and namespace
    /// specifiers carry no component name and are left to `PackageBindings`.
    ///
    /// Returns how the import source matched so the caller can report the
    /// deprecated path.
    pub fn register_import(&mut self, node: &ImportDecl) -> ModuleMatch {
        if node.type_only {
            return ModuleMatch::Unmatched;
        }
        let Some(source) = node.src.value.as_str() else {
            return ModuleMatch::Unmatched;
        };

        let module_match = match_component_module(source);
        if !module_match.is_match() {
            return module_match;
        }

        for specifier in &node.specifiers {
            if let ImportSpecifier::Named(named) = specifier
                && !named.is_type_only
            {
                let tag = tag_from_export_name(&imported_name(named));
                self.insert(named.local.sym.to_string(), TypeDescriptor::Tag(tag));
            }
        }

        module_match
    }

    /// Register the names bound by a factory call.
    ///
    /// - `const Grid = reactify('grid')` binds `Grid` to the first argument.
    /// - `const [Panel, Grid] = reactify('panel', GridClass)` zips names with
    ///   arguments by position. Holes, nested patterns, spread arguments and
    ///   names without an argument are skipped.
    pub fn register_factory_call(&mut self, binding: &Pat, call: &CallExpr, source_map: &SourceMap) {
        match binding {
            Pat::Array(array) => {
                for (position, element) in array.elems.iter().enumerate() {
                    let Some(name) = element.as_ref().and_then(binding_name) else {
                        continue;
                    };
                    if let Some(descriptor) = factory_arg_descriptor(call, position, source_map) {
                        self.insert(name, descriptor);
                    }
                }
            }
            _ => {
                if let Some(name) = binding_name(binding)
                    && let Some(descriptor) = factory_arg_descriptor(call, 0, source_map)
                {
                    self.insert(name, descriptor);
                }
            }
        }
    }
}

/// A string literal argument is a tag; anything else is kept as class source text.
fn factory_arg_descriptor(
    call: &CallExpr,
    position: usize,
    source_map: &SourceMap,
) -> Option<TypeDescriptor> {
    let arg = positional_arg(call, position)?;
    match string_literal(arg) {
        Some(tag) => Some(TypeDescriptor::Tag(tag)),
        None => source_text(source_map, arg.span()).map(TypeDescriptor::Class),
    }
}
