//! A small indentation-tracking string buffer used while walking the AST.
//!
//! Kept deliberately dumb: no line-width wrapping, no pretty-printing
//! algorithm. The emitter is a direct syntax-directed walk, not a formatter.

pub struct Writer {
    buf: String,
    indent: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 0,
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Writes `text` at the current indentation level, followed by a
    /// newline. `text` itself must not contain embedded newlines.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.indent {
            self.buf.push_str("    ");
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Writes `text` verbatim, with no indentation or trailing newline —
    /// used for multi-line blobs like the fixed preamble.
    pub fn raw(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
