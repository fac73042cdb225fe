//! Expression evaluation.

use imp_ir::{Expr, ExprKind, Name};
use imp_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::trace;

use super::Interpreter;
use crate::errors::{not_an_operator, not_callable, type_mismatch, wrong_arity};
use crate::{Denotable, Environment, EvalError, EvalResult, Store, Value};

/// Argument buffer; every builtin takes at most two.
type Args = SmallVec<[Value; 2]>;

impl Interpreter<'_> {
    /// Evaluate `expr` to a value. Reads `store`, never changes it.
    pub fn evaluate(&self, expr: &Expr, env: &Environment, store: &Store) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env, store))
            .map_err(|e| e.with_span_if_missing(expr.span))
    }

    fn eval_inner(&self, expr: &Expr, env: &Environment, store: &Store) -> EvalResult {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Int(*n)),
            ExprKind::Boolean(b) => Ok(Value::Bool(*b)),
            ExprKind::Var(name) => self.eval_var(*name, env, store),
            ExprKind::Let { name, value, body } => {
                let value = self.evaluate(value, env, store)?;
                let inner = env.bind(*name, Denotable::Value(value));
                self.evaluate(body, &inner, store)
            }
            ExprKind::Apply { op, args } if self.short_circuit.contains(*op) => {
                self.eval_short_circuit(*op, args, env, store)
            }
            ExprKind::Apply { op, args } => self.eval_apply(*op, args, env, store),
            ExprKind::FunctionApp { name, args } => self.eval_call(*name, args, env, store),
        }
    }

    fn eval_var(&self, name: Name, env: &Environment, store: &Store) -> EvalResult {
        match env.lookup(name) {
            Some(Denotable::Value(value)) => Ok(*value),
            Some(Denotable::Address(address)) => self.read(store, *address),
            Some(other) => Err(type_mismatch(
                format!("reference to `{}`", self.name_str(name)),
                "a value",
                other.describe(),
            )),
            None => Err(self.undefined(name)),
        }
    }

    fn eval_args(&self, args: &[Expr], env: &Environment, store: &Store) -> Result<Args, EvalError> {
        args.iter()
            .map(|arg| self.evaluate(arg, env, store))
            .collect()
    }

    /// Strict operator application through the environment.
    fn eval_apply(&self, op: Name, args: &[Expr], env: &Environment, store: &Store) -> EvalResult {
        let values = self.eval_args(args, env, store)?;
        match env.lookup(op) {
            Some(Denotable::Operator(operator)) => operator.invoke(&values),
            Some(_) => Err(not_an_operator(self.name_str(op))),
            None => Err(self.undefined(op)),
        }
    }

    /// `and` / `or`: the right operand is evaluated only when it decides
    /// the result.
    fn eval_short_circuit(
        &self,
        op: Name,
        args: &[Expr],
        env: &Environment,
        store: &Store,
    ) -> EvalResult {
        let symbol = self.name_str(op);
        let [lhs, rhs] = args else {
            return Err(wrong_arity(symbol, 2, args.len()));
        };

        let left = self.eval_bool(lhs, env, store, "left", symbol)?;
        let is_and = op == self.short_circuit.and;
        if left != is_and {
            // `false and _` / `true or _`
            return Ok(Value::Bool(left));
        }
        self.eval_bool(rhs, env, store, "right", symbol)
            .map(Value::Bool)
    }

    fn eval_bool(
        &self,
        expr: &Expr,
        env: &Environment,
        store: &Store,
        side: &str,
        symbol: &str,
    ) -> Result<bool, EvalError> {
        let value = self.evaluate(expr, env, store)?;
        value.as_bool().ok_or_else(|| {
            type_mismatch(
                format!("{side} operand of `{symbol}`"),
                "bool",
                value.kind().to_string(),
            )
            .with_span_if_missing(expr.span)
        })
    }

    /// Call of a user function: arguments are evaluated in the caller's
    /// environment, the body in the closure's captured one.
    fn eval_call(&self, name: Name, args: &[Expr], env: &Environment, store: &Store) -> EvalResult {
        let closure = match env.lookup(name) {
            Some(Denotable::Closure(closure)) => closure,
            Some(_) => return Err(not_callable(self.name_str(name))),
            None => return Err(self.undefined(name)),
        };

        let values = self.eval_args(args, env, store)?;
        if values.len() != closure.arity() {
            return Err(wrong_arity(
                self.name_str(name),
                closure.arity(),
                values.len(),
            ));
        }

        trace!(function = self.name_str(name), args = values.len(), "call");
        let call_env = closure
            .decl
            .params
            .iter()
            .zip(values)
            .fold(closure.env.clone(), |env, (param, value)| {
                env.bind(*param, Denotable::Value(value))
            });
        self.evaluate(&closure.decl.body, &call_env, store)
    }
}
