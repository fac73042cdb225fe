//! Builtin operators.
//!
//! Operators are ordinary environment entries: the builtin environment binds
//! each symbol to a static `Operator`, and `Apply` looks the symbol up like
//! any other name. Each operator carries its signature so argument count and
//! kinds are checked in one place before the implementation runs.
//!
//! Integer arithmetic is checked; `/` and `%` round toward negative
//! infinity, so `-7 / 2 == -4` and `-7 % 2 == 1`.

use std::fmt;

use imp_ir::StringInterner;

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, wrong_arity};
use crate::{Denotable, Environment, EvalError, EvalResult, Value, ValueKind};

/// Builtin operator: symbol, signature, and a strict implementation.
pub struct Operator {
    pub symbol: &'static str,
    /// Expected kind of each argument; its length is the arity.
    pub params: &'static [ValueKind],
    pub returns: ValueKind,
    apply: fn(&[Value]) -> EvalResult,
}

impl Operator {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Check the argument count and kinds against the signature.
    pub fn check_args(&self, args: &[Value]) -> Result<(), EvalError> {
        if args.len() != self.arity() {
            return Err(wrong_arity(self.symbol, self.arity(), args.len()));
        }
        for (position, (arg, expected)) in args.iter().zip(self.params).enumerate() {
            if arg.kind() != *expected {
                return Err(type_mismatch(
                    format!("operand {} of `{}`", position.saturating_add(1), self.symbol),
                    expected.to_string(),
                    arg.kind().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Check the arguments, then apply.
    pub fn invoke(&self, args: &[Value]) -> EvalResult {
        self.check_args(args)?;
        (self.apply)(args)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({}", self.symbol)?;
        for (i, param) in self.params.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { ", " })?;
            write!(f, "{param}")?;
        }
        write!(f, " -> {})", self.returns)
    }
}

const INT_INT: &[ValueKind] = &[ValueKind::Int, ValueKind::Int];
const BOOL_BOOL: &[ValueKind] = &[ValueKind::Bool, ValueKind::Bool];
const BOOL: &[ValueKind] = &[ValueKind::Bool];

const fn arith(symbol: &'static str, apply: fn(&[Value]) -> EvalResult) -> Operator {
    Operator {
        symbol,
        params: INT_INT,
        returns: ValueKind::Int,
        apply,
    }
}

const fn relational(symbol: &'static str, apply: fn(&[Value]) -> EvalResult) -> Operator {
    Operator {
        symbol,
        params: INT_INT,
        returns: ValueKind::Bool,
        apply,
    }
}

const fn logical(
    symbol: &'static str,
    params: &'static [ValueKind],
    apply: fn(&[Value]) -> EvalResult,
) -> Operator {
    Operator {
        symbol,
        params,
        returns: ValueKind::Bool,
        apply,
    }
}

/// Every builtin operator, in binding order.
pub static BUILTIN_OPERATORS: [Operator; 14] = [
    arith("+", |args| int_op(args, "+", i64::checked_add)),
    arith("-", |args| int_op(args, "-", i64::checked_sub)),
    arith("*", |args| int_op(args, "*", i64::checked_mul)),
    arith("/", |args| int_pair(args, "/").and_then(|(a, b)| floor_div(a, b)).map(Value::Int)),
    arith("%", |args| int_pair(args, "%").and_then(|(a, b)| floor_mod(a, b)).map(Value::Int)),
    relational("==", |args| compare(args, "==", |a, b| a == b)),
    relational("!=", |args| compare(args, "!=", |a, b| a != b)),
    relational("<", |args| compare(args, "<", |a, b| a < b)),
    relational(">", |args| compare(args, ">", |a, b| a > b)),
    relational("<=", |args| compare(args, "<=", |a, b| a <= b)),
    relational(">=", |args| compare(args, ">=", |a, b| a >= b)),
    logical("and", BOOL_BOOL, |args| bool_op(args, "and", |a, b| a && b)),
    logical("or", BOOL_BOOL, |args| bool_op(args, "or", |a, b| a || b)),
    logical("not", BOOL, |args| match args {
        [Value::Bool(b)] => Ok(Value::Bool(!b)),
        _ => Err(operand_error("not", args)),
    }),
];

/// Builtin operator for `symbol`, if there is one.
pub fn lookup_builtin(symbol: &str) -> Option<&'static Operator> {
    BUILTIN_OPERATORS.iter().find(|op| op.symbol == symbol)
}

/// Environment holding every builtin operator, bound by symbol.
pub fn builtin_environment(interner: &StringInterner) -> Environment {
    BUILTIN_OPERATORS.iter().fold(Environment::new(), |env, op| {
        env.bind(interner.intern(op.symbol), Denotable::Operator(op))
    })
}

/// Floor division: the quotient rounded toward negative infinity.
pub(crate) fn floor_div(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(division_by_zero());
    }
    let quotient = a.checked_div(b).ok_or_else(|| integer_overflow("/"))?;
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient.checked_sub(1).ok_or_else(|| integer_overflow("/"))
    } else {
        Ok(quotient)
    }
}

/// Floor modulo: the remainder takes the sign of the divisor.
pub(crate) fn floor_mod(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(division_by_zero());
    }
    // i64::MIN % -1 overflows in hardware but is 0 mathematically.
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        remainder.checked_add(b).ok_or_else(|| integer_overflow("%"))
    } else {
        Ok(remainder)
    }
}

fn int_pair(args: &[Value], symbol: &'static str) -> Result<(i64, i64), EvalError> {
    match args {
        [Value::Int(a), Value::Int(b)] => Ok((*a, *b)),
        _ => Err(operand_error(symbol, args)),
    }
}

fn int_op(args: &[Value], symbol: &'static str, op: fn(i64, i64) -> Option<i64>) -> EvalResult {
    let (a, b) = int_pair(args, symbol)?;
    op(a, b)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(symbol))
}

fn compare(args: &[Value], symbol: &'static str, op: fn(i64, i64) -> bool) -> EvalResult {
    let (a, b) = int_pair(args, symbol)?;
    Ok(Value::Bool(op(a, b)))
}

fn bool_op(args: &[Value], symbol: &'static str, op: fn(bool, bool) -> bool) -> EvalResult {
    match args {
        [Value::Bool(a), Value::Bool(b)] => Ok(Value::Bool(op(*a, *b))),
        _ => Err(operand_error(symbol, args)),
    }
}

/// Error for an implementation reached with arguments `check_args` would
/// have rejected.
#[cold]
fn operand_error(symbol: &'static str, args: &[Value]) -> EvalError {
    lookup_builtin(symbol)
        .and_then(|op| op.check_args(args).err())
        .unwrap_or_else(|| type_mismatch(format!("operands of `{symbol}`"), "valid operands", "other"))
}
