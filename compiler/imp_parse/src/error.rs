//! Parse error types.
//!
//! Parsing stops at the first error, so a `ParseError` always describes the
//! leftmost problem in the input.

use imp_ir::{Span, TokenKind};
use std::fmt;
use thiserror::Error;

/// What the parser was working on when it failed.
///
/// Rendered as "while parsing {description}" in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Program,
    VarDecl,
    Assignment,
    Print,
    IfCommand,
    WhileLoop,
    FunctionDecl,
    LetExpr,
    FunctionCall,
    Parenthesized,
    Expression,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            Self::Program => "the program",
            Self::VarDecl => "a variable declaration",
            Self::Assignment => "an assignment",
            Self::Print => "a print command",
            Self::IfCommand => "an if command",
            Self::WhileLoop => "a while loop",
            Self::FunctionDecl => "a function declaration",
            Self::LetExpr => "a let expression",
            Self::FunctionCall => "a function call",
            Self::Parenthesized => "a parenthesized expression",
            Self::Expression => "an expression",
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Expected one thing, found another token.
    #[error("expected {expected}, found `{found}` while parsing {context}")]
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
        context: ErrorContext,
    },

    /// Input the lexer could not turn into a token.
    #[error("invalid character in input")]
    InvalidToken,

    /// Integer literal outside the 64-bit signed range.
    #[error("integer literal does not fit in 64 bits")]
    IntegerTooLarge,
}

impl ParseErrorKind {
    /// Headline for rendered reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. } => "unexpected token",
            Self::InvalidToken => "invalid token",
            Self::IntegerTooLarge => "integer too large",
        }
    }
}

/// A parse failure at a source location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn unexpected(
        found: TokenKind,
        expected: &'static str,
        context: ErrorContext,
        span: Span,
    ) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found,
                expected,
                context,
            },
            span,
        )
    }

    /// Stable error code, shown in reports.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "E1001",
            ParseErrorKind::InvalidToken => "E1002",
            ParseErrorKind::IntegerTooLarge => "E1003",
        }
    }

    /// Suggestion for common slips, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match &self.kind {
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Eq,
                context: ErrorContext::Assignment,
                ..
            } => Some("assignment is written `x <- value`; declare with `var x = value`"),
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Eof,
                context: ErrorContext::IfCommand,
                ..
            } => Some("every `if` needs an `else` branch and a closing `endif`"),
            ParseErrorKind::UnexpectedToken {
                found: TokenKind::Eof,
                context: ErrorContext::WhileLoop,
                ..
            } => Some("close the loop body with `done`"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
