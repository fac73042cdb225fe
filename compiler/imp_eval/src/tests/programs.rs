use imp_ir::{Span, StringInterner};
use pretty_assertions::assert_eq;

use super::{eval, run, run_with};
use crate::{buffer_handler, EvalErrorKind, Value};

#[test]
fn declare_and_print() {
    assert_eq!(run("var x = 10; var y = x + 5; print y").unwrap(), "15\n");
}

#[test]
fn assignment_updates_the_cell() {
    assert_eq!(
        run("var x = 10; print x; x <- 20; print x").unwrap(),
        "10\n20\n"
    );
}

#[test]
fn gcd_by_subtraction() {
    let source = "\
var a = 48;
var b = 18;
while b != 0 do
    if a > b then a <- a - b else b <- b - a endif
done;
print a";
    assert_eq!(run(source).unwrap(), "6\n");
}

#[test]
fn short_circuit_skips_division_by_zero() {
    assert_eq!(
        run("var x = false; print x and (10 / 0 > 5)").unwrap(),
        "false\n"
    );
}

#[test]
fn function_sees_enclosing_variable() {
    let source = "var y = 42; function f(a, b) = y + a + b; print f(3, 0)";
    assert_eq!(run(source).unwrap(), "45\n");
}

#[test]
fn let_expressions() {
    assert_eq!(eval("let n = 6 in n * (n + 1)"), Ok(Value::Int(42)));
    assert_eq!(eval("let a = 1 in let a = a + 1 in a"), Ok(Value::Int(2)));
}

#[test]
fn floor_division_and_modulo() {
    assert_eq!(eval("(0 - 7) / 2"), Ok(Value::Int(-4)));
    assert_eq!(eval("(0 - 7) % 2"), Ok(Value::Int(1)));
    assert_eq!(eval("7 % (0 - 2)"), Ok(Value::Int(-1)));
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(eval("1 < 2 and not (3 >= 4)"), Ok(Value::Bool(true)));
    assert_eq!(eval("(2 == 2) and (1 != 1)"), Ok(Value::Bool(false)));
    assert_eq!(eval("false or 2 <= 2"), Ok(Value::Bool(true)));
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(run("print 2 + 3 * 4").unwrap(), "14\n");
}

#[test]
fn equality_is_only_defined_on_integers() {
    let err = eval("true == false").unwrap_err();
    assert_eq!(err.code(), "E3003");
    assert_eq!(
        err.to_string(),
        "type mismatch in operand 1 of `==`: expected int, got bool"
    );
}

#[test]
fn operator_type_errors() {
    let err = eval("1 + true").unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch in operand 2 of `+`: expected int, got bool"
    );
    assert_eq!(err.span(), Some(Span::new(0, 8)));
}

#[test]
fn division_by_zero_reports_its_span() {
    let err = run("var x = 1;\nprint x / 0").unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::DivisionByZero);
    assert_eq!(err.span(), Some(Span::new(17, 22)));
}

#[test]
fn overflow_is_an_error() {
    let err = eval("9223372036854775807 + 1").unwrap_err();
    assert_eq!(err.code(), "E3007");
}

#[test]
fn nested_blocks_and_shadowing() {
    let source = "\
var x = 1;
if true then
    var x = 2;
    print x;
    while x < 4 do
        var step = 1;
        x <- x + step
    done;
    print x
else
    print 0
endif;
print x";
    assert_eq!(run(source).unwrap(), "2\n4\n1\n");
}

#[test]
fn function_without_parameters() {
    assert_eq!(run("var k = 7; function seven() = k; print seven()").unwrap(), "7\n");
}

#[test]
fn function_arguments_evaluate_in_caller_scope() {
    let source = "\
var a = 100;
function add(a, b) = a + b;
var b = 5;
print add(b, a)";
    assert_eq!(run(source).unwrap(), "105\n");
}

#[test]
fn functions_cannot_recurse() {
    let err = run("function f(n) = f(n - 1); print f(3)").unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::UndefinedName { name: "f".to_owned() });
}

#[test]
fn output_before_a_failure_is_kept() {
    let interner = StringInterner::new();
    let handler = buffer_handler();
    let err = run_with(&interner, &handler, "print 1; print 2 / 0; print 3", true).unwrap_err();
    assert_eq!(err.kind(), &EvalErrorKind::DivisionByZero);
    assert_eq!(handler.output(), "1\n");
}

#[test]
fn block_results_flow_out_through_outer_variables() {
    let source = "\
var r = 0;
if true then
    var t = 9;
    r <- t
else
    print 0
endif;
print r";
    assert_eq!(run(source).unwrap(), "9\n");
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 3000;
    let mut source = String::from("var x = 0;\n");
    for _ in 0..depth {
        source.push_str("if true then ");
    }
    source.push_str("x <- x + 1");
    for _ in 0..depth {
        source.push_str(" else print 0 endif");
    }
    source.push_str(";\nprint x");
    assert_eq!(run(&source).unwrap(), "1\n");

    let mut expr = String::new();
    for _ in 0..depth {
        expr.push_str("(1 + ");
    }
    expr.push('0');
    for _ in 0..depth {
        expr.push(')');
    }
    assert_eq!(eval(&expr), Ok(Value::Int(3000)));
}
