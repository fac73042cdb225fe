//! Tokens produced by the lexer.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span};

/// Token kinds of the IMP surface syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Ident(Name),

    // Keywords
    Var,
    Print,
    If,
    Then,
    Else,
    Endif,
    While,
    Do,
    Done,
    Function,
    Let,
    In,
    True,
    False,
    And,
    Or,
    Not,

    // Punctuation
    /// `<-`
    Arrow,
    /// `=`
    Eq,
    Semicolon,
    Comma,
    LParen,
    RParen,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    /// Input the lexer could not recognize.
    Error,
    /// Integer literal that does not fit in 64 bits.
    IntOverflow,
    Eof,
}

impl TokenKind {
    /// Human-readable name used in parse error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Var => "var",
            TokenKind::Print => "print",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Endif => "endif",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Done => "done",
            TokenKind::Function => "function",
            TokenKind::Let => "let",
            TokenKind::In => "in",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Arrow => "<-",
            TokenKind::Eq => "=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Error => "invalid token",
            TokenKind::IntOverflow => "integer literal",
            TokenKind::Eof => "end of input",
        }
    }

    /// Operator symbol for tokens that lower to `Apply`, as interned by
    /// the builtin environment.
    pub fn operator_symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            _ => return None,
        };
        Some(symbol)
    }

    /// True for tokens that can close a command sequence.
    pub fn ends_sequence(&self) -> bool {
        matches!(
            self,
            TokenKind::Else | TokenKind::Endif | TokenKind::Done | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "{n}"),
            _ => f.write_str(self.display_name()),
        }
    }
}

/// A token with its source location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output: a token vector that always ends with `Eof`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// First token that failed to lex, if any.
    pub fn first_error(&self) -> Option<&Token> {
        self.tokens
            .iter()
            .find(|t| matches!(t.kind, TokenKind::Error | TokenKind::IntOverflow))
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
