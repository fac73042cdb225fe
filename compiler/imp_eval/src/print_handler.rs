//! Output sink for `print`.
//!
//! Enum dispatch over a fixed set of destinations: stdout for the CLI, a
//! buffer for tests and embedding, and a silent sink.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Value;

pub enum PrintHandler {
    /// Writes each printed value on its own line to stdout.
    Stdout,
    /// Captures output for later inspection.
    Buffer(Mutex<String>),
    /// Discards output.
    Silent,
}

impl PrintHandler {
    /// Emit one printed value followed by a newline.
    pub fn emit(&self, value: Value) {
        self.println(&value.to_string());
    }

    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout (e.g. `impc run x.imp | head`) is not an
                // evaluation error.
                let _ = writeln!(out, "{line}");
            }
            Self::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output so far. Empty for non-capturing handlers.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Return captured output and clear the buffer.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => std::mem::take(&mut *buffer.lock()),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between a session and its interpreters.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
