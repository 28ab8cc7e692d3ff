//! Parser for PPAPI IDL.
//!
//! Turns IDL source files into a [`shim_ir::Ast`]. Parsing fails fast: the
//! first error in any file aborts with a [`ParseError`]. After all files
//! parse, every type reference is checked against the builtins and the
//! declarations of the whole file set.

mod cursor;
mod error;
mod grammar;
mod resolve;

use std::path::Path;

use shim_ir::{Ast, SourceFile};

pub use error::ParseError;

/// Parse one file's text. Type references are not checked here since they
/// may name types declared in other files.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path))]
pub fn parse_source(path: &str, text: &str) -> Result<SourceFile, ParseError> {
    let tokens = shim_lexer::lex(text);
    let file = grammar::Parser::new(path, text, &tokens)
        .parse_file()
        .map_err(|diagnostic| ParseError::syntax(path, text, diagnostic))?;
    tracing::debug!(
        interfaces = file.interfaces.len(),
        structs = file.structs.len(),
        typedefs = file.typedefs.len(),
        "parsed"
    );
    Ok(file)
}

/// Parse an in-memory file set of `(path, text)` pairs and check its type
/// references.
pub fn parse_sources<P, T>(sources: &[(P, T)]) -> Result<Ast, ParseError>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let files = sources
        .iter()
        .map(|(path, text)| parse_source(path.as_ref(), text.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let ast = Ast::new(files);
    if let Err(err) = resolve::check(&ast) {
        let (path, text) = &sources[err.file];
        return Err(ParseError::syntax(
            path.as_ref(),
            text.as_ref(),
            err.diagnostic,
        ));
    }
    Ok(ast)
}

/// Read and parse files from disk.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn parse_files<P: AsRef<Path>>(paths: &[P]) -> Result<Ast, ParseError> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: display.clone(),
            source,
        })?;
        sources.push((display, text));
    }
    parse_sources(&sources)
}
