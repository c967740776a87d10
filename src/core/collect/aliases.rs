//! Local names that refer to the factory function or to a whole component package.

use std::collections::HashSet;

use swc_ecma_ast::{CallExpr, Expr, ImportDecl, ImportSpecifier, VarDeclarator};

use crate::core::collect::helpers::{
    binding_name, callee_ident, imported_name, positional_arg, string_literal, unwrap_ts_expr,
};
use crate::core::collect::registry::TypeDescriptor;
use crate::core::utils::{FACTORY_EXPORT, is_component_package, is_factory_module};

/// Local names bound to `reactify`.
///
/// Populated from `import { reactify } from '@extjs/reactor'`, including
/// renamed imports such as `import { reactify as wrap }`.
#[derive(Debug, Default)]
pub struct FactoryAliases {
    names: HashSet<String>,
}

impl FactoryAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every local alias of the factory export in an import declaration.
    pub fn collect_import(&mut self, node: &ImportDecl) {
        if node.type_only {
            return;
        }
        let Some(source) = node.src.value.as_str() else {
            return;
        };
        if !is_factory_module(source) {
            return;
        }

        for specifier in &node.specifiers {
            if let ImportSpecifier::Named(named) = specifier
                && !named.is_type_only
                && imported_name(named) == FACTORY_EXPORT
            {
                self.names.insert(named.local.sym.to_string());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the call when `expr` invokes one of the known aliases.
    pub fn factory_call<'a>(&self, expr: &'a Expr) -> Option<&'a CallExpr> {
        match unwrap_ts_expr(expr) {
            Expr::Call(call) if callee_ident(call).is_some_and(|name| self.contains(name)) => {
                Some(call)
            }
            _ => None,
        }
    }
}

/// Local names bound to an entire component package.
///
/// Covers `var ext_react_1 = require('@extjs/ext-react')` (as emitted by
/// TypeScript and Babel module transforms) and namespace or default imports
/// of the same packages. Members of these bindings used as tags resolve
/// directly to a tag, without a registry entry.
#[derive(Debug, Default)]
pub struct PackageBindings {
    names: HashSet<String>,
}

impl PackageBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` when the declarator is `name = require("<component package>")`.
    pub fn check_declarator(&mut self, decl: &VarDeclarator) {
        let Some(name) = binding_name(&decl.name) else {
            return;
        };
        let Some(init) = &decl.init else { return };

        if let Expr::Call(call) = unwrap_ts_expr(init)
            && callee_ident(call) == Some("require")
            && let Some(source) = positional_arg(call, 0).and_then(string_literal)
            && is_component_package(&source)
        {
            self.names.insert(name);
        }
    }

    /// Record `import * as pkg` and `import pkg` forms of a component package.
    pub fn collect_import(&mut self, node: &ImportDecl) {
        if node.type_only {
            return;
        }
        let Some(source) = node.src.value.as_str() else {
            return;
        };
        if !is_component_package(source) {
            return;
        }

        for specifier in &node.specifiers {
            match specifier {
                ImportSpecifier::Namespace(ns) => {
                    self.names.insert(ns.local.sym.to_string());
                }
                ImportSpecifier::Default(default) => {
                    self.names.insert(default.local.sym.to_string());
                }
                ImportSpecifier::Named(_) => {}
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Descriptor for a `pkg.Member` tag, or `None` when `pkg` is not a package binding.
    pub fn member_tag(&self, object: &str, member: &str) -> Option<TypeDescriptor> {
        self.contains(object)
            .then(|| TypeDescriptor::Tag(member.to_lowercase()))
    }
}
