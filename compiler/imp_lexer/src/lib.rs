//! Lexer for IMP using logos with string interning.
//!
//! Identifiers are interned as they are produced, so the parser only ever
//! sees `Name` handles. Lexing never fails: unrecognized input becomes an
//! `Error` token and the parser reports it at its span.

use imp_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[token("var")]
    Var,
    #[token("print")]
    Print,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("endif")]
    Endif,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("done")]
    Done,
    #[token("function")]
    Function,
    #[token("let")]
    Let,
    #[token("in")]
    In,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,

    #[token("<-")]
    Arrow,
    #[token("=")]
    Eq,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,

    // Range-checked during conversion so an oversized literal gets its own
    // diagnostic instead of a generic error token.
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex source code into a `TokenList` terminated by `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = span_of(logos.span());
        let kind = match token_result {
            Ok(raw) => convert_token(raw, logos.slice(), interner),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));
    result
}

fn span_of(range: std::ops::Range<usize>) -> Span {
    // Offsets past u32::MAX saturate; programs that large are not realistic.
    Span::try_from_range(range.clone()).unwrap_or_else(|_| {
        let clamp = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    })
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int => slice
            .parse::<i64>()
            .map_or(TokenKind::IntOverflow, TokenKind::Int),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::Var => TokenKind::Var,
        RawToken::Print => TokenKind::Print,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::Endif => TokenKind::Endif,
        RawToken::While => TokenKind::While,
        RawToken::Do => TokenKind::Do,
        RawToken::Done => TokenKind::Done,
        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::In => TokenKind::In,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,

        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,

        // Skipped by logos, never yielded.
        RawToken::LineComment => TokenKind::Error,
    }
}
