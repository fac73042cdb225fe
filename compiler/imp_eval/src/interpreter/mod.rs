//! Tree-walking interpreter for IMP.
//!
//! - `expr.rs`: `evaluate`, including short-circuit `and`/`or` and calls
//! - `command.rs`: `execute`, blocks, loops, and the transactional `run`
//! - `builder.rs`: `InterpreterBuilder`
//!
//! The interpreter itself holds only configuration. Environment and store
//! are passed in by the caller, which lets a REPL keep them across inputs.

mod builder;
mod command;
mod expr;
mod interned_names;

pub use builder::InterpreterBuilder;

use imp_ir::{Name, StringInterner};

use crate::errors::undefined_name;
use crate::{Address, EvalError, SharedPrintHandler, Store, Value};
use interned_names::ShortCircuitNames;

pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    print_handler: SharedPrintHandler,
    short_circuit: ShortCircuitNames,
    /// Reject reads of reclaimed addresses instead of returning stale data.
    check_liveness: bool,
}

impl<'a> Interpreter<'a> {
    /// Interpreter printing to stdout with default settings.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn builder(interner: &'a StringInterner) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner)
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn checks_liveness(&self) -> bool {
        self.check_liveness
    }

    #[inline]
    fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    #[cold]
    fn undefined(&self, name: Name) -> EvalError {
        undefined_name(self.name_str(name))
    }

    fn read(&self, store: &Store, address: Address) -> Result<Value, EvalError> {
        if self.check_liveness {
            store.access_live(address)
        } else {
            store.access(address)
        }
    }
}
