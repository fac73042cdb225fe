//! Short-circuit and block-reclamation laws over generated programs.
#![allow(clippy::arithmetic_side_effects, reason = "address bookkeeping in assertions")]

use imp_ir::StringInterner;
use proptest::prelude::*;

use super::{eval, run_with};
use crate::{silent_handler, Address, Value};

/// Expressions that fail when evaluated.
fn failing_expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<u32>().prop_map(|n| format!("{n} / 0 > 1")),
        any::<u32>().prop_map(|n| format!("({n} % 0) == 0")),
        Just("missing".to_owned()),
        Just("undefined_fn(1, 2)".to_owned()),
        Just("1 + true".to_owned()),
        Just("not 5".to_owned()),
    ];
    leaf.prop_recursive(3, 8, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("not ({e})")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("({a}) and ({b})")),
        ]
    })
}

/// Boolean expressions that evaluate to `value` without error.
fn bool_expr(value: bool) -> impl Strategy<Value = String> {
    (any::<u16>(), any::<u16>()).prop_map(move |(a, b)| {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if value {
            format!("{lo} <= {hi}")
        } else {
            format!("not ({lo} <= {hi})")
        }
    })
}

proptest! {
    #[test]
    fn false_and_never_evaluates_right(lhs in bool_expr(false), rhs in failing_expr()) {
        prop_assert_eq!(eval(&format!("({lhs}) and ({rhs})")), Ok(Value::Bool(false)));
    }

    #[test]
    fn true_or_never_evaluates_right(lhs in bool_expr(true), rhs in failing_expr()) {
        prop_assert_eq!(eval(&format!("({lhs}) or ({rhs})")), Ok(Value::Bool(true)));
    }

    #[test]
    fn deciding_operand_is_evaluated(lhs in bool_expr(true), rhs in failing_expr()) {
        let source = format!("({lhs}) and ({rhs})");
        prop_assert!(eval(&source).is_err(), "right operand of {} must be evaluated", source);
    }

    #[test]
    fn blocks_reclaim_their_addresses(outer in 1usize..5, inner in 1usize..8, rounds in 0i64..5) {
        let mut source = String::new();
        for i in 0..outer {
            source.push_str(&format!("var o{i} = {i};\n"));
        }
        source.push_str("var n = 0;\n");
        source.push_str(&format!("while n < {rounds} do\n"));
        for i in 0..inner {
            source.push_str(&format!("    var t{i} = n * {i};\n"));
        }
        source.push_str("    n <- n + 1\ndone;\n");
        source.push_str(&format!("if n == {rounds} then\n"));
        for i in 0..inner {
            source.push_str(&format!("    var u{i} = o0 + {i};\n"));
        }
        source.push_str("    o0 <- 100\nelse\n    print 0\nendif");

        let interner = StringInterner::new();
        let store = run_with(&interner, &silent_handler(), &source, true)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        // Only top-level variables stay allocated.
        prop_assert_eq!(store.next_address().index(), outer + 1);
        prop_assert_eq!(store.access(Address::new(0)), Ok(Value::Int(100)));
        for i in 1..outer {
            let expected = i64::try_from(i).unwrap_or(i64::MAX);
            prop_assert_eq!(store.access(Address::new(i)), Ok(Value::Int(expected)));
        }
        prop_assert_eq!(store.access(Address::new(outer)), Ok(Value::Int(rounds)));
    }
}
