//! Props of an element-creation site, as verbatim object-literal properties.

use serde_json::Value;
use swc_common::{SourceMap, Spanned};
use swc_ecma_ast::{
    CallExpr, Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXExpr, ObjectLit,
};

use crate::core::collect::helpers::{
    is_identifier_name, positional_arg, source_text, unwrap_parens,
};

/// Properties of the second `createElement` argument.
///
/// Only an object literal contributes properties; `null`, identifiers and
/// other expressions yield none.
pub fn call_props(call: &CallExpr, source_map: &SourceMap) -> Vec<String> {
    match positional_arg(call, 1).map(unwrap_parens) {
        Some(Expr::Object(obj)) => object_props(obj, source_map),
        _ => Vec::new(),
    }
}

/// Each property (including spreads) copied from source.
pub fn object_props(obj: &ObjectLit, source_map: &SourceMap) -> Vec<String> {
    obj.props
        .iter()
        .filter_map(|prop| source_text(source_map, prop.span()))
        .collect()
}

/// JSX attributes rewritten as object-literal properties.
///
/// - `title="Orders"` becomes `title: "Orders"`
/// - `flex={1}` becomes `flex: 1`
/// - `shadow` becomes `shadow: true`
/// - `{...rest}` becomes `...rest`
/// - `data-id="x"` becomes `"data-id": "x"`
pub fn jsx_props(attrs: &[JSXAttrOrSpread], source_map: &SourceMap) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(attr) => jsx_attr_prop(attr, source_map),
            JSXAttrOrSpread::SpreadElement(spread) => {
                source_text(source_map, spread.expr.span()).map(|text| format!("...{}", text))
            }
        })
        .collect()
}

fn jsx_attr_prop(attr: &JSXAttr, source_map: &SourceMap) -> Option<String> {
    let name = match &attr.name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    };
    let key = if is_identifier_name(&name) {
        name
    } else {
        Value::String(name).to_string()
    };

    let value = match &attr.value {
        None => "true".to_string(),
        Some(JSXAttrValue::Str(s)) => Value::String(s.value.to_string_lossy().to_string()).to_string(),
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => source_text(source_map, expr.span())?,
            JSXExpr::JSXEmptyExpr(_) => return None,
        },
        Some(other) => source_text(source_map, other.span())?,
    };

    Some(format!("{}: {}", key, value))
}
