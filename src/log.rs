//! Diagnostic sink for the front-end
//!
//! The parser and the AST printer report through the [`Log`] trait instead of
//! writing to stdio directly, so hosts can route diagnostics wherever they
//! want. The parser only ever calls [`Log::error`], and at most once per
//! parse; the printer uses [`Log::info`] plus the indentation hooks.

/// Receiver for front-end output.
pub trait Log {
    /// Prints an information line.
    fn info(&mut self, message: &str);

    /// Prints a warning.
    fn warning(&mut self, message: &str);

    /// Prints an error.
    fn error(&mut self, message: &str);

    /// Increments the indentation for subsequent lines.
    fn inc_indent(&mut self) {}

    /// Decrements the indentation.
    fn dec_indent(&mut self) {}
}

/// Logger writing info lines to stdout and warnings/errors to stderr.
#[derive(Default)]
pub struct StdLog {
    indent: String,
}

impl StdLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Log for StdLog {
    fn info(&mut self, message: &str) {
        println!("{}{}", self.indent, message);
    }

    fn warning(&mut self, message: &str) {
        eprintln!("{}warning: {}", self.indent, message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}{}", self.indent, message);
    }

    fn inc_indent(&mut self) {
        self.indent.push_str("  ");
    }

    fn dec_indent(&mut self) {
        self.indent.truncate(self.indent.len().saturating_sub(2));
    }
}

/// Logger that discards everything.
#[derive(Default)]
pub struct NullLog;

impl Log for NullLog {
    fn info(&mut self, _message: &str) {}
    fn warning(&mut self, _message: &str) {}
    fn error(&mut self, _message: &str) {}
}

/// Logger that records every line, with indentation applied to info lines.
/// Mainly useful in tests and tools that post-process printer output.
#[derive(Default)]
pub struct MemoryLog {
    pub infos: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    indent: String,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Log for MemoryLog {
    fn info(&mut self, message: &str) {
        self.infos.push(format!("{}{}", self.indent, message));
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn inc_indent(&mut self) {
        self.indent.push_str("  ");
    }

    fn dec_indent(&mut self) {
        self.indent.truncate(self.indent.len().saturating_sub(2));
    }
}
