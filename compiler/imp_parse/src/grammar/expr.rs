//! Expression parsing.
//!
//! Precedence, lowest first:
//!
//! | level | operators |
//! |---|---|
//! | or | `or` |
//! | and | `and` |
//! | equality | `==` `!=` |
//! | comparison | `<` `>` `<=` `>=` |
//! | additive | `+` `-` |
//! | multiplicative | `*` `/` `%` |
//! | unary | `not` |
//!
//! All binary levels are left-associative. `let .. in ..` is only allowed
//! at the top of an expression (or inside parentheses) and extends as far
//! right as possible.

use imp_ir::{Expr, ExprKind, Name, Span, TokenKind};
use imp_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

type OperandFn<'a> = fn(&mut Parser<'a>) -> Result<Expr, ParseError>;

impl<'a> Parser<'a> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            if self.cursor.check(TokenKind::Let) {
                self.parse_let()
            } else {
                self.parse_or()
            }
        })
    }

    /// `let name = value in body`
    fn parse_let(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident(ErrorContext::LetExpr)?;
        self.cursor.expect(TokenKind::Eq, ErrorContext::LetExpr)?;
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::In, ErrorContext::LetExpr)?;
        let body = self.parse_expr()?;
        let span = start.merge(body.span);
        Ok(Expr::new(
            ExprKind::Let {
                name,
                value: Box::new(value),
                body: Box::new(body),
            },
            span,
        ))
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_and, |k| matches!(k, TokenKind::Or))
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_equality, |k| matches!(k, TokenKind::And))
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_comparison, |k| {
            matches!(k, TokenKind::EqEq | TokenKind::NotEq)
        })
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_additive, |k| {
            matches!(
                k,
                TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq
            )
        })
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_multiplicative, |k| {
            matches!(k, TokenKind::Plus | TokenKind::Minus)
        })
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(Self::parse_unary, |k| {
            matches!(k, TokenKind::Star | TokenKind::Slash | TokenKind::Percent)
        })
    }

    /// One left-associative precedence level.
    fn parse_left_assoc(
        &mut self,
        operand: OperandFn<'a>,
        is_operator: fn(TokenKind) -> bool,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while is_operator(self.cursor.current_kind()) {
            let kind = self.cursor.advance().kind;
            let op = self.operator_name(kind)?;
            let right = operand(self)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Apply {
                    op,
                    args: vec![left, right],
                },
                span,
            );
        }
        Ok(left)
    }

    /// `not` binds tighter than every binary operator.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if !self.cursor.check(TokenKind::Not) {
            return self.parse_primary();
        }
        let token = self.cursor.advance();
        let op = self.operator_name(token.kind)?;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = token.span.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Apply {
                op,
                args: vec![operand],
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Number(n), token.span))
            }
            TokenKind::True | TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::Boolean(token.kind == TokenKind::True),
                    token.span,
                ))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::LParen) {
                    self.parse_call(name, token.span)
                } else {
                    Ok(Expr::new(ExprKind::Var(name), token.span))
                }
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                let close = self
                    .cursor
                    .expect(TokenKind::RParen, ErrorContext::Parenthesized)?;
                Ok(Expr::new(inner.kind, token.span.merge(close)))
            }
            _ => Err(self
                .cursor
                .unexpected("an expression", ErrorContext::Expression)),
        }
    }

    /// `name(args)`; the cursor is on `(`.
    fn parse_call(&mut self, name: Name, start: Span) -> Result<Expr, ParseError> {
        self.cursor.advance();
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let close = self
            .cursor
            .expect(TokenKind::RParen, ErrorContext::FunctionCall)?;
        Ok(Expr::new(
            ExprKind::FunctionApp { name, args },
            start.merge(close),
        ))
    }

    /// Interned symbol of an operator token.
    ///
    /// Callers only pass tokens their level accepts; any other token is
    /// reported at the previous position rather than lowered to a bogus name.
    pub(crate) fn operator_name(&self, kind: TokenKind) -> Result<Name, ParseError> {
        match kind.operator_symbol() {
            Some(symbol) => Ok(self.interner().intern(symbol)),
            None => Err(ParseError::unexpected(
                kind,
                "an operator",
                ErrorContext::Expression,
                self.cursor.previous_span(),
            )),
        }
    }
}
