//! Helper functions for AST node extraction.
//!
//! Pure functions with no state dependencies, shared by the symbol tables and
//! the usage scanner.

use swc_common::{SourceMap, SourceMapper, Span};
use swc_ecma_ast::{CallExpr, Callee, Expr, ImportNamedSpecifier, Lit, ModuleExportName, Pat};

/// Unwrap TypeScript-specific expression wrappers to get the inner expression.
pub fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::TsNonNull(ts_non_null) => unwrap_ts_expr(&ts_non_null.expr),
        Expr::TsTypeAssertion(ts_assert) => unwrap_ts_expr(&ts_assert.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}

/// Strip redundant parentheses only.
pub fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Value of a plain string literal (`'grid'`, `"grid"`). Templates don't count.
pub fn string_literal(expr: &Expr) -> Option<String> {
    match unwrap_parens(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

/// Name of the callee when it is a bare identifier: `reactify(...)`, `require(...)`.
pub fn callee_ident(call: &CallExpr) -> Option<&str> {
    match &call.callee {
        Callee::Expr(expr) => match &**expr {
            Expr::Ident(ident) => Some(ident.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Positional argument at `index`. Spread arguments have no fixed position.
pub fn positional_arg(call: &CallExpr, index: usize) -> Option<&Expr> {
    call.args
        .get(index)
        .filter(|arg| arg.spread.is_none())
        .map(|arg| &*arg.expr)
}

/// Extract the exported name for a named import specifier.
///
/// `import { Grid as G }` yields `Grid`; `import { Grid }` yields `Grid`.
pub fn imported_name(named: &ImportNamedSpecifier) -> String {
    named
        .imported
        .as_ref()
        .map(|i| match i {
            ModuleExportName::Ident(ident) => ident.sym.to_string(),
            ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
        })
        .unwrap_or_else(|| named.local.sym.to_string())
}

/// Name bound by a simple identifier pattern.
pub fn binding_name(pat: &Pat) -> Option<String> {
    match pat {
        Pat::Ident(ident) => Some(ident.id.sym.to_string()),
        _ => None,
    }
}

/// Verbatim source text covered by `span`.
pub fn source_text(source_map: &SourceMap, span: Span) -> Option<String> {
    source_map.span_to_snippet(span).ok()
}

/// Whether `name` can be written as an unquoted object key.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
