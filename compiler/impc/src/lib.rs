//! IMP driver.
//!
//! Ties the lexer, parser and evaluator together behind a `Session`, renders
//! errors as annotated source reports, and implements the `impc` commands.

pub mod commands;
pub mod reporting;
mod session;
mod tracing_setup;

pub use session::{Session, SessionError};
pub use tracing_setup::init_tracing;
