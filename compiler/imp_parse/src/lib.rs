//! Recursive descent parser for IMP.
//!
//! Turns a `TokenList` into the command and expression trees of `imp_ir`.
//! Operators are lowered to `Apply` nodes carrying the interned operator
//! symbol; precedence lives entirely in the grammar (see `grammar::expr`).

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use imp_ir::{CommandSeq, Expr, StringInterner, TokenKind, TokenList};
use tracing::trace;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
        }
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Parse a whole program: a command sequence followed by end of input.
    pub fn parse_program(mut self) -> Result<CommandSeq, ParseError> {
        let program = self.parse_command_seq()?;
        if !self.cursor.is_at_end() {
            return Err(self
                .cursor
                .unexpected("`;` or end of input", ErrorContext::Program));
        }
        trace!(commands = program.len(), "parsed program");
        Ok(program)
    }

    /// Parse a single expression followed by end of input.
    pub fn parse_standalone_expr(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            return Err(self
                .cursor
                .unexpected("end of input", ErrorContext::Expression));
        }
        Ok(expr)
    }
}

/// Report the first token the lexer could not make sense of.
fn check_lex_errors(tokens: &TokenList) -> Result<(), ParseError> {
    match tokens.first_error() {
        Some(token) if token.kind == TokenKind::IntOverflow => Err(ParseError::new(
            ParseErrorKind::IntegerTooLarge,
            token.span,
        )),
        Some(token) => Err(ParseError::new(ParseErrorKind::InvalidToken, token.span)),
        None => Ok(()),
    }
}

/// Parse a program from lexer output.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_program(tokens: &TokenList, interner: &StringInterner) -> Result<CommandSeq, ParseError> {
    check_lex_errors(tokens)?;
    Parser::new(tokens, interner).parse_program()
}

/// Parse a standalone expression from lexer output.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_expression(tokens: &TokenList, interner: &StringInterner) -> Result<Expr, ParseError> {
    check_lex_errors(tokens)?;
    Parser::new(tokens, interner).parse_standalone_expr()
}
