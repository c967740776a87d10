use anyhow::{Result, anyhow};
use std::{path::Path, sync::Arc};
use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{
    EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error as SyntaxError,
};

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Syntax for a module, chosen by its file extension.
///
/// `.ts`/`.mts`/`.cts` parse as TypeScript and `.tsx` as TypeScript with JSX.
/// Everything else parses as JavaScript with JSX, export-default-from
/// (`export Grid from "./Grid"`), function bind (`::this.onTap`) and
/// decorators enabled.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            fn_bind: true,
            decorators: true,
            decorators_before_export: true,
            export_default_from: true,
            import_attributes: true,
            ..Default::default()
        }),
    }
}

/// Parse a module's source text into an AST.
///
/// Object rest/spread, class properties, async generators and dynamic
/// `import()` are part of every syntax. Recoverable syntax errors are
/// treated like fatal ones: a module that does not parse cleanly is not
/// analyzed.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| describe_error(&source_map, file_path, &e))?;

        if let Some(err) = parser.take_errors().first() {
            return Err(describe_error(&source_map, file_path, err));
        }

        Ok(ParsedJSX { module, source_map })
    })
}

fn describe_error(source_map: &SourceMap, file_path: &str, err: &SyntaxError) -> anyhow::Error {
    let loc = source_map.lookup_char_pos(err.span().lo);
    anyhow!(
        "Failed to parse {}:{}:{}: {}",
        file_path,
        loc.line,
        loc.col.0 + 1,
        err.kind().msg()
    )
}
