//! Whole-program type-reference checks.
//!
//! Runs once all files are parsed, since a file may use types declared in
//! any other file of the set.

use rustc_hash::FxHashMap;
use shim_diagnostic::{Diagnostic, ErrorCode};
use shim_ir::{lookup_builtin, Ast, SourceFile, Span, TypedefKind};

/// A failed check, with the index of the file it points into.
pub(crate) struct ResolveError {
    pub file: usize,
    pub diagnostic: Diagnostic,
}

pub(crate) fn check(ast: &Ast) -> Result<(), ResolveError> {
    check_duplicates(ast)?;
    let decls = ast.type_decls();
    for (index, file) in ast.files.iter().enumerate() {
        for (name, span) in type_references(file) {
            if lookup_builtin(name).is_none() && !decls.contains_key(name) {
                return Err(ResolveError {
                    file: index,
                    diagnostic: Diagnostic::error(ErrorCode::E2001)
                        .with_message(format!("unknown type `{name}`"))
                        .with_label(span, "not a builtin or a declared type"),
                });
            }
        }
    }
    Ok(())
}

fn declared_names(file: &SourceFile) -> impl Iterator<Item = (&str, Span)> {
    let structs = file.structs.iter().map(|s| (s.name.as_str(), s.span));
    let enums = file.enums.iter().map(|e| (e.name.as_str(), e.span));
    let typedefs = file.typedefs.iter().map(|t| (t.name.as_str(), t.span));
    let interfaces = file.interfaces.iter().map(|i| (i.name.as_str(), i.span));
    structs.chain(enums).chain(typedefs).chain(interfaces)
}

fn check_duplicates(ast: &Ast) -> Result<(), ResolveError> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    for (index, file) in ast.files.iter().enumerate() {
        for (name, span) in declared_names(file) {
            if let Some(first) = seen.insert(name, index) {
                let first_path = ast.files.get(first).map_or("", SourceFile::file_name);
                return Err(ResolveError {
                    file: index,
                    diagnostic: Diagnostic::error(ErrorCode::E2002)
                        .with_message(format!("type `{name}` is declared more than once"))
                        .with_label(span, "redeclared here")
                        .with_note(format!("first declared in `{first_path}`")),
                });
            }
        }
    }
    Ok(())
}

/// Every type name used in `file`, with the span of the node using it.
fn type_references(file: &SourceFile) -> Vec<(&str, Span)> {
    let mut refs = Vec::new();
    for def in &file.structs {
        refs.extend(def.fields.iter().map(|f| (f.ty.as_str(), f.span)));
    }
    for def in &file.typedefs {
        match &def.kind {
            TypedefKind::Alias { target } => refs.push((target.as_str(), def.span)),
            TypedefKind::Function { ret, params } => {
                refs.push((ret.as_str(), def.span));
                refs.extend(params.iter().map(|p| (p.ty.as_str(), p.span)));
            }
        }
    }
    for iface in &file.interfaces {
        for member in &iface.members {
            refs.push((member.ret.as_str(), member.span));
            refs.extend(member.params.iter().map(|p| (p.ty.as_str(), p.span)));
        }
    }
    refs
}
