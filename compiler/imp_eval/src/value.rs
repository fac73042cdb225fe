//! Expressible and denotable values.

use std::fmt;
use std::rc::Rc;

use imp_ir::FunctionDecl;

use crate::{Environment, Operator};

/// Result of evaluating an expression; the only thing a store cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Bool(bool),
}

impl Value {
    #[inline]
    pub fn kind(self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    #[inline]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n),
            Value::Bool(_) => None,
        }
    }

    #[inline]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(b),
            Value::Int(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Runtime type tag of a `Value`, used in operator signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int => f.write_str("int"),
            ValueKind::Bool => f.write_str("bool"),
        }
    }
}

/// Store location. Only `Store::allocate` creates addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(usize);

impl Address {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Address(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A user function paired with the environment it was declared in.
///
/// The captured environment is the one in effect *before* the function's
/// own name was bound, so a function cannot refer to itself.
pub struct Closure {
    pub decl: Rc<FunctionDecl>,
    pub env: Environment,
}

impl Closure {
    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.arity()
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.decl.name)
            .field("arity", &self.arity())
            .field("captured", &self.env.len())
            .finish()
    }
}

/// Anything a name can be bound to.
#[derive(Clone, Debug)]
pub enum Denotable {
    /// `let` constant or function parameter.
    Value(Value),
    /// `var` variable.
    Address(Address),
    /// Builtin operator.
    Operator(&'static Operator),
    /// User-defined function.
    Closure(Rc<Closure>),
}

impl Denotable {
    /// Short description for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Denotable::Value(_) => "constant",
            Denotable::Address(_) => "variable",
            Denotable::Operator(_) => "operator",
            Denotable::Closure(_) => "function",
        }
    }
}

#[cfg(test)]
mod tests;
