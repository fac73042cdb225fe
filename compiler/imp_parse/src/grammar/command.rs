//! Command parsing.

use std::rc::Rc;

use imp_ir::{Command, CommandKind, CommandSeq, FunctionDecl, TokenKind};
use tracing::trace;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `command (";" command)*`, allowing one trailing `;` before a
    /// sequence terminator.
    pub(crate) fn parse_command_seq(&mut self) -> Result<CommandSeq, ParseError> {
        let mut seq = CommandSeq::new(self.parse_command()?);
        while self.cursor.eat(TokenKind::Semicolon) {
            if self.cursor.current_kind().ends_sequence() {
                break;
            }
            seq.push(self.parse_command()?);
        }
        Ok(seq)
    }

    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::Var => self.parse_var_decl()?,
            TokenKind::Print => {
                self.cursor.advance();
                CommandKind::Print(self.parse_expr()?)
            }
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Function => CommandKind::FunctionDecl(Rc::new(self.parse_function_decl()?)),
            TokenKind::Ident(_) => self.parse_assign()?,
            _ => return Err(self.cursor.unexpected("a command", ErrorContext::Program)),
        };
        let span = start.merge(self.cursor.previous_span());
        trace!(?span, "parsed command");
        Ok(Command::new(kind, span))
    }

    fn parse_var_decl(&mut self) -> Result<CommandKind, ParseError> {
        self.cursor.advance();
        let (name, _) = self.cursor.expect_ident(ErrorContext::VarDecl)?;
        self.cursor.expect(TokenKind::Eq, ErrorContext::VarDecl)?;
        let value = self.parse_expr()?;
        Ok(CommandKind::VarDecl { name, value })
    }

    fn parse_assign(&mut self) -> Result<CommandKind, ParseError> {
        let (name, _) = self.cursor.expect_ident(ErrorContext::Assignment)?;
        self.cursor.expect(TokenKind::Arrow, ErrorContext::Assignment)?;
        let value = self.parse_expr()?;
        Ok(CommandKind::Assign { name, value })
    }

    fn parse_if(&mut self) -> Result<CommandKind, ParseError> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::Then, ErrorContext::IfCommand)?;
        let then_branch = self.parse_block(ErrorContext::IfCommand)?;
        self.cursor.expect(TokenKind::Else, ErrorContext::IfCommand)?;
        let else_branch = self.parse_block(ErrorContext::IfCommand)?;
        self.cursor.expect(TokenKind::Endif, ErrorContext::IfCommand)?;
        Ok(CommandKind::IfElse {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<CommandKind, ParseError> {
        self.cursor.advance();
        let cond = self.parse_expr()?;
        self.cursor.expect(TokenKind::Do, ErrorContext::WhileLoop)?;
        let body = self.parse_block(ErrorContext::WhileLoop)?;
        self.cursor.expect(TokenKind::Done, ErrorContext::WhileLoop)?;
        Ok(CommandKind::While { cond, body })
    }

    /// Nested command sequence of an `if` branch or loop body.
    fn parse_block(&mut self, context: ErrorContext) -> Result<CommandSeq, ParseError> {
        if self.cursor.current_kind().ends_sequence() {
            return Err(self.cursor.unexpected("a command", context));
        }
        imp_stack::ensure_sufficient_stack(|| self.parse_command_seq())
    }

    /// `function name(params) = body`
    fn parse_function_decl(&mut self) -> Result<FunctionDecl, ParseError> {
        let start = self.cursor.advance().span;
        let (name, _) = self.cursor.expect_ident(ErrorContext::FunctionDecl)?;
        self.cursor.expect(TokenKind::LParen, ErrorContext::FunctionDecl)?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                let (param, _) = self.cursor.expect_ident(ErrorContext::FunctionDecl)?;
                params.push(param);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen, ErrorContext::FunctionDecl)?;
        self.cursor.expect(TokenKind::Eq, ErrorContext::FunctionDecl)?;
        let body = self.parse_expr()?;

        Ok(FunctionDecl {
            name,
            params,
            body,
            span: start.merge(self.cursor.previous_span()),
        })
    }
}
