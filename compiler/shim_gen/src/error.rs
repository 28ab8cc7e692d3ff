//! Generation errors.

use std::io;
use std::path::PathBuf;

use shim_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("no output path configured")]
    MissingOutputPath,

    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(ErrorCode::E3001).with_message(self.to_string());
        match self {
            GenError::MissingOutputPath => {
                diagnostic.with_note("pass `--output=<path>` to choose a destination")
            }
            GenError::Write { source, .. } => diagnostic.with_note(source.to_string()),
        }
    }
}
