#![deny(clippy::arithmetic_side_effects)]
//! IMP Eval - tree-walking evaluator for IMP programs.
//!
//! # Semantic domains
//!
//! - `Value`: what expressions produce and store cells hold (int, bool)
//! - `Denotable`: what a name can be bound to (a value, an `Address`, an
//!   `Operator`, or a `Closure`)
//! - `Environment`: persistent name to `Denotable` map; binding returns a
//!   new environment and leaves the old one intact
//! - `Store`: address to `Value` map with a movable allocation cursor
//!
//! # Evaluation
//!
//! `Interpreter::evaluate` reads the store and never changes it.
//! `Interpreter::execute` threads a `&mut Store` and returns the extended
//! environment. `Interpreter::run` executes a program one top-level command
//! at a time, rolling the store back if a command fails.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod store;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{builtin_environment, lookup_builtin, Operator, BUILTIN_OPERATORS};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use store::Store;
pub use value::{Address, Closure, Denotable, Value, ValueKind};

#[cfg(test)]
mod tests;
