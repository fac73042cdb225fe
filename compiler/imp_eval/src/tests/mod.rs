//! End-to-end evaluator tests: source text through the lexer and parser.

mod laws;
mod programs;

use imp_ir::StringInterner;

use crate::{
    buffer_handler, builtin_environment, EvalError, Interpreter, SharedPrintHandler, Store, Value,
};

/// Lex, parse and run `source` in a fresh environment, returning printed
/// output or the first error.
fn run(source: &str) -> Result<String, EvalError> {
    let interner = StringInterner::new();
    let handler = buffer_handler();
    run_with(&interner, &handler, source, true)?;
    Ok(handler.output())
}

fn run_with(
    interner: &StringInterner,
    handler: &SharedPrintHandler,
    source: &str,
    check_liveness: bool,
) -> Result<Store, EvalError> {
    let tokens = imp_lexer::lex(source, interner);
    let program = imp_parse::parse_program(&tokens, interner)
        .unwrap_or_else(|e| panic!("parse error in {source:?}: {e}"));
    let interp = Interpreter::builder(interner)
        .print_handler(handler.clone())
        .check_liveness(check_liveness)
        .build();
    let mut env = builtin_environment(interner);
    let mut store = Store::new();
    interp.run(&program, &mut env, &mut store)?;
    Ok(store)
}

/// Evaluate a standalone expression against the builtin environment.
fn eval(source: &str) -> Result<Value, EvalError> {
    let interner = StringInterner::new();
    let tokens = imp_lexer::lex(source, &interner);
    let expr = imp_parse::parse_expression(&tokens, &interner)
        .unwrap_or_else(|e| panic!("parse error in {source:?}: {e}"));
    Interpreter::new(&interner).evaluate(&expr, &builtin_environment(&interner), &Store::new())
}
