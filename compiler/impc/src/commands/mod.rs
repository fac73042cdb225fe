//! Command handlers for the `impc` CLI.
//!
//! Each handler reads its input, does the work, and reports problems on
//! stderr. Handlers return whether they succeeded; `main` turns that into
//! the exit status.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::{run_repl, run_repl_with};
pub use run::{run_file, run_source};

/// Read a source file, reporting the failure on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            None
        }
    }
}
