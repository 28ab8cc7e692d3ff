//! Command handlers for the `shimc` CLI.
//!
//! Handlers return the process exit code; `main` owns `process::exit`.
//! Shared error rendering lives here in the module root.

use std::io::IsTerminal;

use shim_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use shim_diagnostic::Diagnostic;
use shim_parse::ParseError;

mod explain;
mod generate;

pub use explain::explain_error;
pub use generate::{generate_shims, parse_generate_options, GenerateOptions, DEFAULT_RELEASES};
pub use test::run_self_tests_command;

fn use_colors() -> bool {
    std::io::stderr().is_terminal()
}

/// Render a parse failure, with a source snippet when one is available.
pub(crate) fn report_parse_error(err: &ParseError) {
    match (err.diagnostic(), err.source_text()) {
        (Some(diagnostic), Some(text)) => {
            let mut emitter = TerminalEmitter::stderr(use_colors()).with_source(err.path(), text);
            emitter.emit(diagnostic);
            emitter.emit_summary(1, 0);
            emitter.flush();
        }
        _ => {
            let mut message = err.to_string();
            if let Some(source) = std::error::Error::source(err) {
                message = format!("{message}: {source}");
            }
            eprintln!("error: {message}");
        }
    }
}

/// Render diagnostics that have no source file behind them.
pub(crate) fn report_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut emitter = TerminalEmitter::stderr(use_colors());
    emitter.emit_all(diagnostics);
    emitter.flush();
}
