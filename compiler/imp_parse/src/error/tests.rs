use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unexpected_token_message_names_context() {
    let err = ParseError::unexpected(
        TokenKind::Semicolon,
        "an expression",
        ErrorContext::Print,
        Span::new(6, 7),
    );
    assert_eq!(
        err.to_string(),
        "expected an expression, found `;` while parsing a print command"
    );
    assert_eq!(err.code(), "E1001");
    assert_eq!(err.kind.title(), "unexpected token");
}

#[test]
fn codes_are_distinct() {
    let invalid = ParseError::new(ParseErrorKind::InvalidToken, Span::DUMMY);
    let too_large = ParseError::new(ParseErrorKind::IntegerTooLarge, Span::DUMMY);
    assert_eq!(invalid.code(), "E1002");
    assert_eq!(too_large.code(), "E1003");
}

#[test]
fn hint_for_equals_in_assignment() {
    let err = ParseError::unexpected(
        TokenKind::Eq,
        "`<-`",
        ErrorContext::Assignment,
        Span::DUMMY,
    );
    assert!(err.hint().is_some_and(|h| h.contains("<-")));
}

#[test]
fn no_hint_for_ordinary_mistakes() {
    let err = ParseError::unexpected(
        TokenKind::Comma,
        "an expression",
        ErrorContext::Expression,
        Span::DUMMY,
    );
    assert_eq!(err.hint(), None);
}
