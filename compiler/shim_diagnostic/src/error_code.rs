//! Error codes for all generator diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the phase that raised it.

use std::fmt;

/// Error codes for all generator diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Name resolution errors
/// - E3xxx: Generation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Unterminated block comment
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected identifier
    E1002,
    /// Malformed version number
    E1003,
    /// Interface name lacks a `PPB`/`PPP` prefix
    E1004,
    /// Duplicate member, parameter, or release name
    E1005,
    /// Malformed attribute
    E1006,

    // Name Resolution Errors (E2xxx)
    /// Unknown type name
    E2001,
    /// Type declared more than once
    E2002,

    // Generation Errors (E3xxx)
    /// Output file could not be written
    E3001,
    /// Requested release is not defined by any label
    E3002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E3002,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
        }
    }

    /// One-line explanation, used by `shimc explain`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in IDL source",
            ErrorCode::E0002 => "block comment is never closed",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected an identifier",
            ErrorCode::E1003 => "version numbers are written `major` or `major.minor`",
            ErrorCode::E1004 => "interface names must start with `PPB` or `PPP`",
            ErrorCode::E1005 => "name is declared twice in the same scope",
            ErrorCode::E1006 => "attribute is missing its value or has the wrong kind of value",
            ErrorCode::E2001 => "type name is neither a builtin nor declared in any input file",
            ErrorCode::E2002 => "type name is declared in more than one place",
            ErrorCode::E3001 => "the generated C file could not be written",
            ErrorCode::E3002 => "requested release is not defined by any label",
        }
    }

    /// Parse `E1001` (case-insensitive) back into a code.
    pub fn parse(s: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
