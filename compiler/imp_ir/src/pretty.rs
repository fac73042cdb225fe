//! Render AST nodes back to concrete syntax.
//!
//! Binary operator applications are always parenthesized, so the output
//! parses back to the same tree regardless of precedence.

use std::fmt::{self, Write};

use crate::ast::{Command, CommandKind, CommandSeq, Expr, ExprKind};
use crate::StringInterner;

const INDENT: &str = "    ";

/// `Display` adapter for an expression.
pub struct ExprDisplay<'a> {
    expr: &'a Expr,
    interner: &'a StringInterner,
}

impl<'a> ExprDisplay<'a> {
    pub fn new(expr: &'a Expr, interner: &'a StringInterner) -> Self {
        ExprDisplay { expr, interner }
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.expr, self.interner)
    }
}

/// `Display` adapter for a command sequence, one command per line.
pub struct CommandSeqDisplay<'a> {
    seq: &'a CommandSeq,
    interner: &'a StringInterner,
}

impl<'a> CommandSeqDisplay<'a> {
    pub fn new(seq: &'a CommandSeq, interner: &'a StringInterner) -> Self {
        CommandSeqDisplay { seq, interner }
    }
}

impl fmt::Display for CommandSeqDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, self.seq, self.interner, 0)
    }
}

fn write_expr(f: &mut impl Write, expr: &Expr, interner: &StringInterner) -> fmt::Result {
    match &expr.kind {
        ExprKind::Number(n) => write!(f, "{n}"),
        ExprKind::Boolean(b) => write!(f, "{b}"),
        ExprKind::Var(name) => f.write_str(interner.lookup(*name)),
        ExprKind::Let { name, value, body } => {
            write!(f, "let {} = ", interner.lookup(*name))?;
            write_expr(f, value, interner)?;
            f.write_str(" in ")?;
            write_expr(f, body, interner)
        }
        ExprKind::Apply { op, args } => {
            let symbol = interner.lookup(*op);
            match args.as_slice() {
                [operand] => {
                    write!(f, "({symbol} ")?;
                    write_expr(f, operand, interner)?;
                    f.write_char(')')
                }
                [lhs, rhs] => {
                    f.write_char('(')?;
                    write_expr(f, lhs, interner)?;
                    write!(f, " {symbol} ")?;
                    write_expr(f, rhs, interner)?;
                    f.write_char(')')
                }
                _ => {
                    // Not producible by the parser; shown in call form.
                    f.write_str(symbol)?;
                    write_args(f, args, interner)
                }
            }
        }
        ExprKind::FunctionApp { name, args } => {
            f.write_str(interner.lookup(*name))?;
            write_args(f, args, interner)
        }
    }
}

fn write_args(f: &mut impl Write, args: &[Expr], interner: &StringInterner) -> fmt::Result {
    f.write_char('(')?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_expr(f, arg, interner)?;
    }
    f.write_char(')')
}

fn write_seq(
    f: &mut impl Write,
    seq: &CommandSeq,
    interner: &StringInterner,
    depth: usize,
) -> fmt::Result {
    let last = seq.len() - 1;
    for (i, command) in seq.iter().enumerate() {
        write_command(f, command, interner, depth)?;
        if i < last {
            f.write_char(';')?;
        }
        f.write_char('\n')?;
    }
    Ok(())
}

fn write_indent(f: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_command(
    f: &mut impl Write,
    command: &Command,
    interner: &StringInterner,
    depth: usize,
) -> fmt::Result {
    write_indent(f, depth)?;
    match &command.kind {
        CommandKind::VarDecl { name, value } => {
            write!(f, "var {} = ", interner.lookup(*name))?;
            write_expr(f, value, interner)
        }
        CommandKind::Assign { name, value } => {
            write!(f, "{} <- ", interner.lookup(*name))?;
            write_expr(f, value, interner)
        }
        CommandKind::Print(value) => {
            f.write_str("print ")?;
            write_expr(f, value, interner)
        }
        CommandKind::IfElse {
            cond,
            then_branch,
            else_branch,
        } => {
            f.write_str("if ")?;
            write_expr(f, cond, interner)?;
            f.write_str(" then\n")?;
            write_seq(f, then_branch, interner, depth + 1)?;
            write_indent(f, depth)?;
            f.write_str("else\n")?;
            write_seq(f, else_branch, interner, depth + 1)?;
            write_indent(f, depth)?;
            f.write_str("endif")
        }
        CommandKind::While { cond, body } => {
            f.write_str("while ")?;
            write_expr(f, cond, interner)?;
            f.write_str(" do\n")?;
            write_seq(f, body, interner, depth + 1)?;
            write_indent(f, depth)?;
            f.write_str("done")
        }
        CommandKind::FunctionDecl(decl) => {
            write!(f, "function {}(", interner.lookup(decl.name))?;
            for (i, param) in decl.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(interner.lookup(*param))?;
            }
            f.write_str(") = ")?;
            write_expr(f, &decl.body, interner)
        }
    }
}

#[cfg(test)]
mod tests;
