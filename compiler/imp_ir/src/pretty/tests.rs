use super::*;
use crate::ast::FunctionDecl;
use pretty_assertions::assert_eq;

#[test]
fn binary_operators_are_parenthesized() {
    let interner = StringInterner::new();
    let plus = interner.intern("+");
    let star = interner.intern("*");
    let expr = Expr::apply(
        plus,
        vec![
            Expr::number(1),
            Expr::apply(star, vec![Expr::number(2), Expr::number(3)]),
        ],
    );
    assert_eq!(ExprDisplay::new(&expr, &interner).to_string(), "(1 + (2 * 3))");
}

#[test]
fn unary_not() {
    let interner = StringInterner::new();
    let not = interner.intern("not");
    let expr = Expr::apply(not, vec![Expr::boolean(true)]);
    assert_eq!(ExprDisplay::new(&expr, &interner).to_string(), "(not true)");
}

#[test]
fn let_and_calls() {
    let interner = StringInterner::new();
    let n = interner.intern("n");
    let f = interner.intern("f");
    let expr = Expr::let_in(
        n,
        Expr::number(4),
        Expr::call(f, vec![Expr::var(n), Expr::number(1)]),
    );
    assert_eq!(
        ExprDisplay::new(&expr, &interner).to_string(),
        "let n = 4 in f(n, 1)"
    );
}

#[test]
fn commands_render_one_per_line() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let lt = interner.intern("<");
    let plus = interner.intern("+");

    let body = CommandSeq::new(Command::assign(
        x,
        Expr::apply(plus, vec![Expr::var(x), Expr::number(1)]),
    ));
    let mut seq = CommandSeq::new(Command::var_decl(x, Expr::number(0)));
    seq.push(Command::while_loop(
        Expr::apply(lt, vec![Expr::var(x), Expr::number(3)]),
        body,
    ));
    seq.push(Command::print(Expr::var(x)));

    let expected = "\
var x = 0;
while (x < 3) do
    x <- (x + 1)
done;
print x
";
    assert_eq!(CommandSeqDisplay::new(&seq, &interner).to_string(), expected);
}

#[test]
fn if_and_function() {
    let interner = StringInterner::new();
    let inc = interner.intern("inc");
    let a = interner.intern("a");
    let plus = interner.intern("+");

    let mut seq = CommandSeq::new(Command::function(FunctionDecl::new(
        inc,
        vec![a],
        Expr::apply(plus, vec![Expr::var(a), Expr::number(1)]),
    )));
    seq.push(Command::if_else(
        Expr::boolean(false),
        CommandSeq::new(Command::print(Expr::number(1))),
        CommandSeq::new(Command::print(Expr::call(inc, vec![Expr::number(1)]))),
    ));

    let expected = "\
function inc(a) = (a + 1);
if false then
    print 1
else
    print inc(1)
endif
";
    assert_eq!(CommandSeqDisplay::new(&seq, &interner).to_string(), expected);
}
