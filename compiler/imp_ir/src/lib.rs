//! IMP IR - shared data structures for the IMP interpreter.
//!
//! This crate contains the types every other IMP crate speaks:
//! - `Span` for source locations
//! - `Name` / `StringInterner` for interned identifiers and operator symbols
//! - `Token` / `TokenList` for lexer output
//! - The expression and command AST consumed by the evaluator
//! - A pretty-printer that renders the AST back to concrete syntax
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and operator symbols are `Name(u32)`,
//!   so environment lookups compare integers, not strings.
//! - **Spans Everywhere**: every AST node records where it came from, so
//!   runtime errors can point at source text. Hand-built trees use `Span::DUMMY`.

pub mod ast;
mod interner;
mod name;
mod pretty;
mod span;
mod token;

pub use ast::{Command, CommandKind, CommandSeq, Expr, ExprKind, FunctionDecl};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use pretty::{CommandSeqDisplay, ExprDisplay};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
