//! Parse errors.
//!
//! Parsing fails fast: the first problem aborts the whole run. Syntax and
//! name-resolution problems carry a full [`Diagnostic`] plus the source text
//! it points into, so callers can render it with a snippet.

use std::io;

use shim_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read `{path}`")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {diagnostic}")]
    Syntax {
        path: String,
        /// Full text of the file the diagnostic points into.
        text: String,
        diagnostic: Box<Diagnostic>,
    },
}

impl ParseError {
    pub(crate) fn syntax(path: &str, text: &str, diagnostic: Diagnostic) -> Self {
        ParseError::Syntax {
            path: path.to_string(),
            text: text.to_string(),
            diagnostic: Box::new(diagnostic),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ParseError::Io { path, .. } | ParseError::Syntax { path, .. } => path,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.diagnostic().map(|d| d.code)
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ParseError::Syntax { diagnostic, .. } => Some(diagnostic),
            ParseError::Io { .. } => None,
        }
    }

    /// Source text for snippet rendering.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            ParseError::Syntax { text, .. } => Some(text),
            ParseError::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
