//! Token cursor for navigating the token stream.

use std::mem;

use crate::{ErrorContext, ParseError};
use imp_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

/// Position in a `TokenList`.
///
/// The list always ends with `Eof` and the cursor never moves past it, so
/// `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current token. An empty list reads as a dummy `Eof`.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens
                .get(self.pos - 1)
                .map_or(Span::DUMMY, |t| t.span)
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Whether the current token has the same variant as `kind`.
    ///
    /// Payloads are ignored, so `check(TokenKind::Int(0))` matches any integer.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        mem::discriminant(&self.current_kind()) == mem::discriminant(&kind)
    }

    /// Consume the current token. Stays put at `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: TokenKind, context: ErrorContext) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(kind.display_name_quoted(), context))
        }
    }

    /// Consume an identifier or fail.
    pub fn expect_ident(&mut self, context: ErrorContext) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => Ok((name, self.advance().span)),
            _ => Err(self.unexpected("an identifier", context)),
        }
    }

    /// Error describing the current token as unexpected.
    pub fn unexpected(&self, expected: &'static str, context: ErrorContext) -> ParseError {
        let token = self.current();
        ParseError::unexpected(token.kind, expected, context, token.span)
    }
}

/// Quoted token spelling for "expected ..." messages.
trait QuotedName {
    fn display_name_quoted(&self) -> &'static str;
}

impl QuotedName for TokenKind {
    fn display_name_quoted(&self) -> &'static str {
        match self {
            TokenKind::Eq => "`=`",
            TokenKind::Arrow => "`<-`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Then => "`then`",
            TokenKind::Else => "`else`",
            TokenKind::Endif => "`endif`",
            TokenKind::Do => "`do`",
            TokenKind::Done => "`done`",
            TokenKind::In => "`in`",
            TokenKind::Eof => "end of input",
            other => other.display_name(),
        }
    }
}
