//! Runtime errors.
//!
//! Every error aborts the enclosing expression or command and propagates to
//! the caller; nothing is recovered in place. Factory functions are the
//! public way to build errors. The evaluator attaches the span of the
//! innermost failing node on the way out (`with_span_if_missing`).

use imp_ir::Span;
use thiserror::Error;

use crate::{Address, Value};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// Variable, operator, or function lookup miss.
    #[error("undefined name `{name}`")]
    UndefinedName { name: String },

    /// Operator or function applied to the wrong number of arguments.
    #[error("`{name}` expects {expected} argument(s), got {got}")]
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A value or binding of the wrong kind.
    #[error("type mismatch in {context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: String,
        expected: String,
        got: String,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Call of a name that is not bound to a function.
    #[error("`{name}` is not a function")]
    NotCallable { name: String },

    /// Operator application of a name that is not bound to an operator.
    #[error("`{name}` is not an operator")]
    NotAnOperator { name: String },

    /// Result outside the 64-bit signed range.
    #[error("integer overflow in `{operation}`")]
    IntegerOverflow { operation: &'static str },

    /// Address the store never handed out.
    #[error("address {address} was never allocated")]
    UnallocatedAddress { address: Address },

    /// Address reclaimed by an enclosing block (liveness check only).
    #[error("address {address} is no longer live (next free address is {next})")]
    StaleAddress { address: Address, next: Address },
}

/// A runtime error, optionally located in the source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
    span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    #[inline]
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    ///
    /// Dummy spans from hand-built trees are ignored.
    #[must_use]
    pub fn with_span_if_missing(mut self, span: Span) -> Self {
        if self.span.is_none() && !span.is_dummy() {
            self.span = Some(span);
        }
        self
    }

    /// Stable error code, shown in reports.
    pub fn code(&self) -> &'static str {
        match self.kind {
            EvalErrorKind::UndefinedName { .. } => "E3001",
            EvalErrorKind::WrongArity { .. } => "E3002",
            EvalErrorKind::TypeMismatch { .. } => "E3003",
            EvalErrorKind::DivisionByZero => "E3004",
            EvalErrorKind::NotCallable { .. } => "E3005",
            EvalErrorKind::NotAnOperator { .. } => "E3006",
            EvalErrorKind::IntegerOverflow { .. } => "E3007",
            EvalErrorKind::UnallocatedAddress { .. } => "E3008",
            EvalErrorKind::StaleAddress { .. } => "E3009",
        }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

#[cold]
pub fn undefined_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedName {
        name: name.to_owned(),
    })
}

#[cold]
pub fn wrong_arity(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArity {
        name: name.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn type_mismatch(
    context: impl Into<String>,
    expected: impl Into<String>,
    got: impl Into<String>,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected: expected.into(),
        got: got.into(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn not_callable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn not_an_operator(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnOperator {
        name: name.to_owned(),
    })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn unallocated_address(address: Address) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnallocatedAddress { address })
}

#[cold]
pub fn stale_address(address: Address, next: Address) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StaleAddress { address, next })
}
