use super::*;
use pretty_assertions::assert_eq;

#[test]
fn operator_tokens_map_to_builtin_symbols() {
    assert_eq!(TokenKind::Plus.operator_symbol(), Some("+"));
    assert_eq!(TokenKind::GtEq.operator_symbol(), Some(">="));
    assert_eq!(TokenKind::And.operator_symbol(), Some("and"));
    assert_eq!(TokenKind::Not.operator_symbol(), Some("not"));
    assert_eq!(TokenKind::Arrow.operator_symbol(), None);
    assert_eq!(TokenKind::Var.operator_symbol(), None);
}

#[test]
fn sequence_terminators() {
    for kind in [TokenKind::Else, TokenKind::Endif, TokenKind::Done, TokenKind::Eof] {
        assert!(kind.ends_sequence(), "{kind:?} should end a sequence");
    }
    assert!(!TokenKind::Semicolon.ends_sequence());
}

#[test]
fn display_shows_literal_values() {
    assert_eq!(TokenKind::Int(42).to_string(), "42");
    assert_eq!(TokenKind::Arrow.to_string(), "<-");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}

#[test]
fn first_error_finds_bad_tokens() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Var, Span::new(0, 3)));
    list.push(Token::new(TokenKind::Error, Span::new(4, 5)));
    list.push(Token::new(TokenKind::Eof, Span::point(5)));

    assert_eq!(list.len(), 3);
    assert_eq!(
        list.first_error().map(|t| t.span),
        Some(Span::new(4, 5))
    );
}

#[test]
fn first_error_is_none_for_clean_input() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Eof, Span::point(0)));
    assert!(list.first_error().is_none());
}
