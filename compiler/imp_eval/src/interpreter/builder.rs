//! `InterpreterBuilder` for configuring an `Interpreter`.

use imp_ir::StringInterner;

use super::interned_names::ShortCircuitNames;
use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    check_liveness: Option<bool>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            check_liveness: None,
        }
    }

    /// Where `print` output goes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Fail with `StaleAddress` on reads of reclaimed addresses.
    ///
    /// Defaults to on in debug builds and off in release builds.
    #[must_use]
    pub fn check_liveness(mut self, enabled: bool) -> Self {
        self.check_liveness = Some(enabled);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            short_circuit: ShortCircuitNames::new(self.interner),
            check_liveness: self.check_liveness.unwrap_or(cfg!(debug_assertions)),
        }
    }
}
