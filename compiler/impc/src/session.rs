//! Interpreter session: one interner, environment and store shared by
//! every input it runs.
//!
//! A file run uses a session once. The REPL feeds it one line at a time, so
//! variables and functions declared earlier stay visible. A failing input
//! leaves the session as it was after the last command that completed.

use imp_eval::{
    builtin_environment, stdout_handler, Environment, EvalError, Interpreter, SharedPrintHandler,
    Store,
};
use imp_ir::{CommandSeq, SharedInterner, Span, StringInterner, TokenList};
use imp_parse::ParseError;
use thiserror::Error;
use tracing::debug;

/// Why a session input failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SessionError {
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::Parse(e) => e.code(),
            SessionError::Eval(e) => e.code(),
        }
    }

    /// Headline for reports.
    pub fn title(&self) -> &'static str {
        match self {
            SessionError::Parse(e) => e.kind.title(),
            SessionError::Eval(_) => "runtime error",
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            SessionError::Parse(e) => Some(e.span),
            SessionError::Eval(e) => e.span(),
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SessionError::Parse(e) => e.hint(),
            SessionError::Eval(_) => None,
        }
    }
}

pub struct Session {
    interner: SharedInterner,
    env: Environment,
    store: Store,
    print_handler: SharedPrintHandler,
    check_liveness: bool,
}

impl Session {
    /// Session printing to stdout.
    pub fn new() -> Self {
        Session::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        let interner = SharedInterner::new();
        let env = builtin_environment(&interner);
        Session {
            interner,
            env,
            store: Store::new(),
            print_handler,
            check_liveness: cfg!(debug_assertions),
        }
    }

    /// Reject reads of reclaimed store addresses.
    #[must_use]
    pub fn check_liveness(mut self, enabled: bool) -> Self {
        self.check_liveness = enabled;
        self
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn lex(&self, source: &str) -> TokenList {
        imp_lexer::lex(source, &self.interner)
    }

    pub fn parse(&self, source: &str) -> Result<CommandSeq, ParseError> {
        imp_parse::parse_program(&self.lex(source), &self.interner)
    }

    /// Parse `source` and run it against the session state.
    pub fn run_source(&mut self, source: &str) -> Result<(), SessionError> {
        let program = self.parse(source)?;
        let interpreter = Interpreter::builder(&self.interner)
            .print_handler(self.print_handler.clone())
            .check_liveness(self.check_liveness)
            .build();
        interpreter.run(&program, &mut self.env, &mut self.store)?;
        debug!(
            bindings = self.env.len(),
            cells = self.store.len(),
            "input done"
        );
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
