//! Indented C text accumulation.

/// Output buffer for generated C.
#[derive(Debug, Default)]
pub struct CodeWriter {
    indent: usize,
    output: String,
}

impl CodeWriter {
    const INDENT: &'static str = "  ";

    pub fn new() -> Self {
        CodeWriter {
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Append raw text with no indentation.
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write one indented line.
    pub fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str(Self::INDENT);
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// `/* text */` on its own line, followed by a blank line.
    pub fn comment_block(&mut self, text: &str) {
        self.writeln(&format!("/* {text} */"));
        self.newline();
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
