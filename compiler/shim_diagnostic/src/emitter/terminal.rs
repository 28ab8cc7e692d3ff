//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the source text is attached, labels render with the offending line
//! and a caret underline; otherwise the raw span is printed.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

struct SourceContext<'s> {
    path: &'s str,
    text: &'s str,
    lines: LineOffsetTable,
}

/// Terminal emitter for human-readable output.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn new(writer: W, colors: bool) -> Self {
        TerminalEmitter {
            writer,
            colors,
            source: None,
        }
    }

    /// Attach the file the diagnostics point into.
    #[must_use]
    pub fn with_source(mut self, path: &'s str, text: &'s str) -> Self {
        self.source = Some(SourceContext {
            path,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    /// Width of the line-number gutter for this diagnostic.
    fn gutter_width(&self, diagnostic: &Diagnostic) -> usize {
        let Some(src) = &self.source else {
            return 1;
        };
        diagnostic
            .labels
            .iter()
            .map(|l| src.lines.line_from_offset(l.span.start).to_string().len())
            .max()
            .unwrap_or(1)
    }

    fn write_label(&mut self, label: &Label, width: usize) {
        let marker = if label.is_primary { '^' } else { '-' };
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };

        let Some(src) = &self.source else {
            let arrow = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {arrow} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = src.lines.offset_to_line_col(src.text, label.span.start);
        let text = src.lines.line_text(src.text, line).unwrap_or("");
        let available = text.chars().count().saturating_sub(col as usize - 1);
        let span_chars = src
            .text
            .get(label.span.to_range())
            .map_or(0, |s| s.chars().take_while(|c| *c != '\n').count());
        let underline_len = span_chars.min(available).max(1);

        let path = src.path;
        let text = text.to_string();
        let pad = " ".repeat(width);
        let _ = writeln!(self.writer, "{pad}--> {path}:{line}:{col}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line:>width$} | {text}");
        let _ = write!(self.writer, "{pad} | {}", " ".repeat(col as usize - 1));
        let underline: String = std::iter::repeat(marker).take(underline_len).collect();
        if label.message.is_empty() {
            self.write_colored(&underline, color);
        } else {
            self.write_colored(&format!("{underline} {}", label.message), color);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    pub fn stderr(colors: bool) -> Self {
        TerminalEmitter::new(io::stderr(), colors)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let width = self.gutter_width(diagnostic);
        for label in &diagnostic.labels {
            self.write_label(label, width);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{} = ", " ".repeat(width));
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(
                self.writer,
                ": aborting due to {error_count} previous error{}",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
