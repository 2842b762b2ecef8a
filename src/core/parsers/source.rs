use std::{path::Path, sync::Arc};

use swc_common::{FileName, GLOBALS, Globals, SourceMap, Spanned, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;

/// Source flavor of a scanned file, chosen once from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Plain JavaScript. JSX is always enabled since the scanned code bases
    /// are React projects.
    Jsx,
    TypeScript,
    TypeScriptJsx,
    /// HTML templates, scanned with a regex rather than parsed.
    Markup,
}

impl Dialect {
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Some(Dialect::Jsx),
            "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
            "tsx" => Some(Dialect::TypeScriptJsx),
            "html" => Some(Dialect::Markup),
            _ => None,
        }
    }

    fn syntax(self) -> Option<Syntax> {
        match self {
            Dialect::Jsx => Some(Syntax::Es(EsSyntax {
                jsx: true,
                decorators: true,
                export_default_from: true,
                ..Default::default()
            })),
            Dialect::TypeScript => Some(Syntax::Typescript(TsSyntax {
                decorators: true,
                ..Default::default()
            })),
            Dialect::TypeScriptJsx => Some(Syntax::Typescript(TsSyntax {
                tsx: true,
                decorators: true,
                ..Default::default()
            })),
            Dialect::Markup => None,
        }
    }
}

/// Error the parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredError {
    pub line: usize,
    pub message: String,
}

/// Unrecoverable parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {file_path}:{line}: {message}")]
pub struct SourceParseError {
    pub file_path: String,
    pub line: usize,
    pub message: String,
}

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub recovered: Vec<RecoveredError>,
}

/// Parse script source code into an AST.
///
/// Returns `Ok(None)` for [`Dialect::Markup`], which has no AST.
pub fn parse_source(
    code: String,
    file_path: &str,
    dialect: Dialect,
) -> Result<Option<ParsedSource>, SourceParseError> {
    let Some(syntax) = dialect.syntax() else {
        return Ok(None);
    };
    let source_map: Arc<SourceMap> = Default::default();

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser.parse_module().map_err(|e| SourceParseError {
            file_path: file_path.to_string(),
            line: source_map.lookup_char_pos(e.span().lo).line,
            message: format!("{:?}", e.kind()),
        })?;

        let recovered = parser
            .take_errors()
            .into_iter()
            .map(|e| RecoveredError {
                line: source_map.lookup_char_pos(e.span().lo).line,
                message: format!("{:?}", e.kind()),
            })
            .collect();

        Ok(Some(ParsedSource {
            module,
            source_map: source_map.clone(),
            recovered,
        }))
    })
}
