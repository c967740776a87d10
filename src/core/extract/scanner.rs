//! Usage scanner: a single pre-order walk that builds the symbol tables and
//! synthesizes creation statements as element-creation sites are reached.
//!
//! Lookups happen at visit time. An element that textually precedes the
//! factory call declaring its type does not resolve, and a factory call that
//! precedes the import of its alias is not recognized.

use swc_common::SourceMap;
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ImportDecl, JSXElement, JSXElementName, JSXObject, MemberProp,
    VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::collect::helpers::{positional_arg, unwrap_ts_expr};
use crate::core::collect::{FactoryAliases, PackageBindings, TypeDescriptor, TypeRegistry};
use crate::core::extract::ModuleExtraction;
use crate::core::extract::props::{call_props, jsx_props};
use crate::core::extract::statement::{finalize, synthesize};
use crate::core::utils::{ModuleMatch, REPLACEMENT_MODULE};
use crate::issues::{DeprecatedImportIssue, SourceLocation};

pub struct UsageScanner<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    aliases: FactoryAliases,
    packages: PackageBindings,
    registry: TypeRegistry,
    /// One statement per resolved use site, in traversal order.
    statements: Vec<String>,
    deprecations: Vec<DeprecatedImportIssue>,
}

impl<'a> UsageScanner<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap) -> Self {
        Self {
            file_path,
            source_map,
            aliases: FactoryAliases::new(),
            packages: PackageBindings::new(),
            registry: TypeRegistry::new(),
            statements: Vec::new(),
            deprecations: Vec::new(),
        }
    }

    /// Append one statement per registry entry and return the results.
    pub fn finish(mut self) -> ModuleExtraction {
        self.statements.extend(finalize(&self.registry));
        ModuleExtraction {
            file_path: self.file_path.to_string(),
            statements: self.statements,
            deprecations: self.deprecations,
        }
    }

    fn record_deprecation(&mut self, node: &ImportDecl) {
        let loc = self.source_map.lookup_char_pos(node.span.lo);
        self.deprecations.push(DeprecatedImportIssue {
            location: SourceLocation {
                file_path: self.file_path.to_string(),
                line: loc.line,
                col: loc.col.0 + 1,
            },
            module: node.src.value.to_string_lossy().to_string(),
            replacement: REPLACEMENT_MODULE.to_string(),
        });
    }

    /// Descriptor for the tag argument of `React.createElement`.
    fn resolve_tag_expr(&self, tag: &Expr) -> Option<TypeDescriptor> {
        match unwrap_ts_expr(tag) {
            Expr::Member(member) => {
                let Expr::Ident(object) = &*member.obj else {
                    return None;
                };
                let MemberProp::Ident(prop) = &member.prop else {
                    return None;
                };
                self.packages
                    .member_tag(object.sym.as_str(), prop.sym.as_str())
            }
            Expr::Ident(ident) => self.registry.get(ident.sym.as_str()).cloned(),
            _ => None,
        }
    }

    /// Descriptor for a JSX tag name.
    fn resolve_jsx_name(&self, name: &JSXElementName) -> Option<TypeDescriptor> {
        match name {
            JSXElementName::Ident(ident) => self.registry.get(ident.sym.as_str()).cloned(),
            JSXElementName::JSXMemberExpr(member) => match &member.obj {
                JSXObject::Ident(object) => self
                    .packages
                    .member_tag(object.sym.as_str(), member.prop.sym.as_str()),
                JSXObject::JSXMemberExpr(_) => None,
            },
            JSXElementName::JSXNamespacedName(_) => None,
        }
    }
}

/// Whether the call is `React.createElement(...)`.
fn is_create_element(call: &CallExpr) -> bool {
    if let Callee::Expr(callee) = &call.callee
        && let Expr::Member(member) = &**callee
        && let Expr::Ident(object) = &*member.obj
        && let MemberProp::Ident(method) = &member.prop
    {
        object.sym.as_str() == "React" && method.sym.as_str() == "createElement"
    } else {
        false
    }
}

impl Visit for UsageScanner<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        self.aliases.collect_import(node);
        self.packages.collect_import(node);
        if self.registry.register_import(node) == ModuleMatch::Deprecated {
            self.record_deprecation(node);
        }
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        self.packages.check_declarator(node);

        if let Some(init) = &node.init
            && let Some(call) = self.aliases.factory_call(init)
        {
            self.registry
                .register_factory_call(&node.name, call, self.source_map);
        }

        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if is_create_element(node)
            && let Some(descriptor) = positional_arg(node, 0).and_then(|tag| self.resolve_tag_expr(tag))
        {
            let props = call_props(node, self.source_map);
            self.statements.push(synthesize(&descriptor, props));
        }

        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if let Some(descriptor) = self.resolve_jsx_name(&node.opening.name) {
            let props = jsx_props(&node.opening.attrs, self.source_map);
            self.statements.push(synthesize(&descriptor, props));
        }

        node.visit_children_with(self);
    }
}
