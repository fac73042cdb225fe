//! Command execution.

use std::rc::Rc;

use imp_ir::{Command, CommandKind, CommandSeq, Expr, FunctionDecl};
use imp_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use super::Interpreter;
use crate::errors::type_mismatch;
use crate::{Closure, Denotable, Environment, EvalError, Store};

impl Interpreter<'_> {
    /// Execute one command, returning the environment that follows it.
    pub fn execute(
        &self,
        command: &Command,
        env: &Environment,
        store: &mut Store,
    ) -> Result<Environment, EvalError> {
        ensure_sufficient_stack(|| self.exec_inner(command, env, store))
            .map_err(|e| e.with_span_if_missing(command.span))
    }

    fn exec_inner(
        &self,
        command: &Command,
        env: &Environment,
        store: &mut Store,
    ) -> Result<Environment, EvalError> {
        match &command.kind {
            CommandKind::VarDecl { name, value } => {
                let value = self.evaluate(value, env, store)?;
                let address = store.allocate(value);
                trace!(name = self.name_str(*name), %address, "var");
                Ok(env.bind(*name, Denotable::Address(address)))
            }
            CommandKind::Assign { name, value } => {
                let address = match env.lookup(*name) {
                    Some(Denotable::Address(address)) => *address,
                    Some(other) => {
                        return Err(type_mismatch(
                            format!("assignment to `{}`", self.name_str(*name)),
                            "variable",
                            other.describe(),
                        ))
                    }
                    None => return Err(self.undefined(*name)),
                };
                let value = self.evaluate(value, env, store)?;
                store.update(address, value)?;
                Ok(env.clone())
            }
            CommandKind::Print(value) => {
                let value = self.evaluate(value, env, store)?;
                self.print_handler.emit(value);
                Ok(env.clone())
            }
            CommandKind::IfElse {
                cond,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval_condition(cond, env, store, "if")? {
                    then_branch
                } else {
                    else_branch
                };
                self.execute_block(branch, env, store)?;
                Ok(env.clone())
            }
            CommandKind::While { cond, body } => {
                // Each iteration starts from the pre-loop environment.
                let mut iterations: u64 = 0;
                while self.eval_condition(cond, env, store, "while")? {
                    self.execute_block(body, env, store)?;
                    iterations = iterations.saturating_add(1);
                }
                trace!(iterations, "while done");
                Ok(env.clone())
            }
            CommandKind::FunctionDecl(decl) => Ok(self.declare_function(decl, env)),
        }
    }

    /// Bind `decl.name` to a closure over `env`, which does not yet contain
    /// the function itself.
    fn declare_function(&self, decl: &Rc<FunctionDecl>, env: &Environment) -> Environment {
        trace!(name = self.name_str(decl.name), arity = decl.arity(), "function");
        let closure = Closure {
            decl: Rc::clone(decl),
            env: env.clone(),
        };
        env.bind(decl.name, Denotable::Closure(Rc::new(closure)))
    }

    fn eval_condition(
        &self,
        cond: &Expr,
        env: &Environment,
        store: &Store,
        keyword: &str,
    ) -> Result<bool, EvalError> {
        let value = self.evaluate(cond, env, store)?;
        value.as_bool().ok_or_else(|| {
            type_mismatch(
                format!("condition of `{keyword}`"),
                "bool",
                value.kind().to_string(),
            )
            .with_span_if_missing(cond.span)
        })
    }

    /// Run `seq` as a nested block: its bindings are dropped and the
    /// addresses it allocated are reclaimed on exit.
    fn execute_block(
        &self,
        seq: &CommandSeq,
        env: &Environment,
        store: &mut Store,
    ) -> Result<(), EvalError> {
        let mark = store.next_address();
        let result = self.execute_sequence(seq, env, store);
        if store.next_address() != mark {
            debug!(from = %store.next_address(), to = %mark, "reclaim block addresses");
        }
        store.reset_cursor(mark);
        result.map(drop)
    }

    /// Execute commands left to right, threading the environment.
    pub fn execute_sequence(
        &self,
        seq: &CommandSeq,
        env: &Environment,
        store: &mut Store,
    ) -> Result<Environment, EvalError> {
        let mut current = env.clone();
        for command in seq {
            current = self.execute(command, &current, store)?;
        }
        Ok(current)
    }

    /// Run a program one top-level command at a time.
    ///
    /// Each command runs against a store checkpoint. On success the store
    /// changes are kept and `env` advances; on failure the store is rolled
    /// back to the state before the failing command, `env` keeps the
    /// bindings of the commands that completed, and the error is returned.
    /// Output already printed is not retracted.
    #[tracing::instrument(level = "debug", skip_all, fields(commands = program.len()))]
    pub fn run(
        &self,
        program: &CommandSeq,
        env: &mut Environment,
        store: &mut Store,
    ) -> Result<(), EvalError> {
        for command in program {
            store.checkpoint();
            match self.execute(command, env, store) {
                Ok(next) => {
                    store.commit();
                    *env = next;
                }
                Err(err) => {
                    store.rollback();
                    debug!(code = err.code(), span = ?err.span(), "command rolled back");
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}
