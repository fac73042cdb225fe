//! Debug commands: `parse` and `lex` for inspecting the front end.

use imp_ir::{CommandSeqDisplay, TokenKind};

use super::read_file;
use crate::reporting::{eprint_report, ReportOptions};
use crate::{Session, SessionError};

/// Parse a file and print the program back in canonical form.
pub fn parse_file(path: &str, options: ReportOptions) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    let session = Session::new();
    match session.parse(&source) {
        Ok(program) => {
            print!("{}", CommandSeqDisplay::new(&program, session.interner()));
            true
        }
        Err(e) => {
            eprint_report(path, &source, &SessionError::from(e), options);
            false
        }
    }
}

/// Lex a file and print the token stream with spans.
pub fn lex_file(path: &str) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    let session = Session::new();
    let tokens = session.lex(&source);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        match token.kind {
            TokenKind::Ident(name) => {
                println!("  identifier `{}` @ {}", session.interner().lookup(name), token.span);
            }
            kind => println!("  {kind} @ {}", token.span),
        }
    }
    tokens.first_error().is_none()
}
