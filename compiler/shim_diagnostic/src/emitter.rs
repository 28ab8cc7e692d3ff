//! Diagnostic emitters.
//!
//! Only human-readable terminal output is provided; the trait keeps the
//! seam open for machine formats.

mod terminal;

pub use terminal::TerminalEmitter;

use crate::Diagnostic;

/// Trait for emitting diagnostics in some output format.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Emit a trailing error/warning count.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
