use std::error::Error as _;

use shim_ir::Span;

use super::*;

#[test]
fn test_syntax_error_display_and_accessors() {
    let diag = shim_diagnostic::unexpected_token(Span::new(0, 1), "`;`", "`}`");
    let err = ParseError::syntax("a.idl", "}", diag);
    assert_eq!(err.to_string(), "a.idl: error[E1001]: expected `;`, found `}`");
    assert_eq!(err.path(), "a.idl");
    assert_eq!(err.code(), Some(ErrorCode::E1001));
    assert_eq!(err.source_text(), Some("}"));
}

#[test]
fn test_io_error_keeps_source() {
    let err = ParseError::Io {
        path: "missing.idl".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(err.to_string(), "failed to read `missing.idl`");
    assert!(err.source().is_some());
    assert!(err.diagnostic().is_none());
}
