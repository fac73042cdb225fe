//! Expression and command trees.
//!
//! Expressions denote values and never touch the store. Commands may read
//! and write the store and may extend the environment (`var`, `function`).
//!
//! Binary and unary operators are not separate node kinds: the parser lowers
//! `a + b` to `Apply { op: "+", args: [a, b] }`, and the evaluator resolves
//! the operator symbol through the environment like any other name.

use std::fmt;
use std::rc::Rc;

use crate::{Name, Span};

/// Expression node.
#[derive(Clone, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn number(n: i64) -> Self {
        Expr::new(ExprKind::Number(n), Span::DUMMY)
    }

    pub fn boolean(b: bool) -> Self {
        Expr::new(ExprKind::Boolean(b), Span::DUMMY)
    }

    pub fn var(name: Name) -> Self {
        Expr::new(ExprKind::Var(name), Span::DUMMY)
    }

    pub fn apply(op: Name, args: Vec<Expr>) -> Self {
        Expr::new(ExprKind::Apply { op, args }, Span::DUMMY)
    }

    pub fn call(name: Name, args: Vec<Expr>) -> Self {
        Expr::new(ExprKind::FunctionApp { name, args }, Span::DUMMY)
    }

    pub fn let_in(name: Name, value: Expr, body: Expr) -> Self {
        Expr::new(
            ExprKind::Let {
                name,
                value: Box::new(value),
                body: Box::new(body),
            },
            Span::DUMMY,
        )
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// Integer literal.
    Number(i64),
    /// `true` / `false`.
    Boolean(bool),
    /// Identifier reference: a constant, a variable, or an error.
    Var(Name),
    /// `let name = value in body`, binding an immutable constant.
    Let {
        name: Name,
        value: Box<Expr>,
        body: Box<Expr>,
    },
    /// Operator application. `op` is the interned operator symbol.
    Apply { op: Name, args: Vec<Expr> },
    /// `name(args)`, a call of a user-defined function.
    FunctionApp { name: Name, args: Vec<Expr> },
}

/// `function name(params) = body`
///
/// Shared behind an `Rc` so closures can hold the declaration without
/// cloning the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Expr,
    pub span: Span,
}

impl FunctionDecl {
    pub fn new(name: Name, params: Vec<Name>, body: Expr) -> Self {
        FunctionDecl {
            name,
            params,
            body,
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Command node.
#[derive(Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub span: Span,
}

impl Command {
    pub fn new(kind: CommandKind, span: Span) -> Self {
        Command { kind, span }
    }

    pub fn var_decl(name: Name, value: Expr) -> Self {
        Command::new(CommandKind::VarDecl { name, value }, Span::DUMMY)
    }

    pub fn assign(name: Name, value: Expr) -> Self {
        Command::new(CommandKind::Assign { name, value }, Span::DUMMY)
    }

    pub fn print(value: Expr) -> Self {
        Command::new(CommandKind::Print(value), Span::DUMMY)
    }

    pub fn if_else(cond: Expr, then_branch: CommandSeq, else_branch: CommandSeq) -> Self {
        Command::new(
            CommandKind::IfElse {
                cond,
                then_branch,
                else_branch,
            },
            Span::DUMMY,
        )
    }

    pub fn while_loop(cond: Expr, body: CommandSeq) -> Self {
        Command::new(CommandKind::While { cond, body }, Span::DUMMY)
    }

    pub fn function(decl: FunctionDecl) -> Self {
        Command::new(CommandKind::FunctionDecl(Rc::new(decl)), Span::DUMMY)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// `var name = value`
    VarDecl { name: Name, value: Expr },
    /// `name <- value`
    Assign { name: Name, value: Expr },
    /// `print value`
    Print(Expr),
    /// `if cond then .. else .. endif`
    IfElse {
        cond: Expr,
        then_branch: CommandSeq,
        else_branch: CommandSeq,
    },
    /// `while cond do .. done`
    While { cond: Expr, body: CommandSeq },
    /// `function name(params) = body`
    FunctionDecl(Rc<FunctionDecl>),
}

/// Non-empty sequence of commands.
///
/// Every construction path requires at least one command, so evaluators can
/// rely on a sequence always producing at least one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSeq {
    commands: Vec<Command>,
}

impl CommandSeq {
    pub fn new(first: Command) -> Self {
        CommandSeq {
            commands: vec![first],
        }
    }

    /// Build from a vector. Returns `None` if it is empty.
    pub fn from_vec(commands: Vec<Command>) -> Option<Self> {
        if commands.is_empty() {
            None
        } else {
            Some(CommandSeq { commands })
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn first(&self) -> &Command {
        &self.commands[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// Span covering the first through the last command.
    pub fn span(&self) -> Span {
        let first = self.commands[0].span;
        self.commands
            .last()
            .map_or(first, |last| first.merge(last.span))
    }
}

impl<'a> IntoIterator for &'a CommandSeq {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
