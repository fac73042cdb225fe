//! The `repl` command.
//!
//! Each line is a program run against one persistent `Session`. Prompts and
//! error reports go to stderr so that stdout carries only printed values.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::reporting::{write_report, ReportOptions};
use crate::Session;

const PROMPT: &str = "imp> ";
const SOURCE_NAME: &str = "<repl>";

/// Interactive REPL on stdin.
pub fn run_repl(options: ReportOptions) -> bool {
    eprintln!("IMP {} (type `exit` to quit)", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    match run_repl_with(stdin.lock(), io::stderr(), Session::new(), options) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("error: {e}");
            false
        }
    }
}

/// Drive a REPL over `input`, writing prompts and reports to `out`.
///
/// Stops at end of input or on a line reading `exit`. Returns the session so
/// callers can inspect its final state.
pub fn run_repl_with(
    input: impl BufRead,
    mut out: impl Write,
    mut session: Session,
    options: ReportOptions,
) -> io::Result<Session> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        if let Err(error) = session.run_source(line) {
            debug!(code = error.code(), "repl input failed");
            write_report(&mut out, SOURCE_NAME, line, &error, options)?;
        }
    }
    Ok(session)
}
