//! The `run` command: lex, parse and evaluate an IMP source file.

use tracing::info;

use super::read_file;
use crate::reporting::{eprint_report, ReportOptions};
use crate::Session;

/// Run the program in `path`, printing to stdout.
pub fn run_file(path: &str, options: ReportOptions) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    run_source(path, &source, Session::new(), options)
}

/// Run `source` in `session`, reporting any error against `path`.
pub fn run_source(path: &str, source: &str, mut session: Session, options: ReportOptions) -> bool {
    info!(path, bytes = source.len(), "run");
    match session.run_source(source) {
        Ok(()) => true,
        Err(error) => {
            eprint_report(path, source, &error, options);
            false
        }
    }
}
