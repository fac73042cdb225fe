//! Grammar productions, split by syntactic category.
//!
//! - `command.rs`: command sequences and the six command forms
//! - `expr.rs`: `let`, the binary operator precedence chain, `not`, primaries

mod command;
mod expr;
