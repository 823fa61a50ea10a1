//! Property-based tests for evaluation and loop execution.

use crate::{eval, silent_handler, EvalErrorKind, Interpreter, State, Value};
use imp_ir::{BinaryOp, Expr, Name, Program, Stmt};
use proptest::prelude::*;

const BINARY_OPS: [BinaryOp; 11] = [
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Mod,
    BinaryOp::Lt,
    BinaryOp::LtEq,
    BinaryOp::Gt,
    BinaryOp::GtEq,
    BinaryOp::Eq,
    BinaryOp::And,
];

/// Expressions built from literals only.
fn closed_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (-50i64..50).prop_map(Expr::int),
        any::<bool>().prop_map(Expr::bool),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (prop::sample::select(BINARY_OPS.to_vec()), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Expr::binary(op, l, r)),
            inner.prop_map(Expr::not),
        ]
    })
}

fn quiet_interpreter() -> Interpreter {
    Interpreter::builder().print_handler(silent_handler()).build()
}

proptest! {
    #[test]
    fn closed_expressions_ignore_the_environment(expr in closed_expr(), x in any::<i64>()) {
        let mut env = State::new();
        env.bind(&Name::from("x"), x);
        prop_assert_eq!(eval(&expr, &State::new()), eval(&expr, &env));
    }

    #[test]
    fn evaluation_is_repeatable(expr in closed_expr()) {
        let env = State::new();
        prop_assert_eq!(eval(&expr, &env), eval(&expr, &env));
    }

    #[test]
    fn zero_divisor_always_fails(n in any::<i64>(), use_mod in any::<bool>()) {
        let op = if use_mod { BinaryOp::Mod } else { BinaryOp::Div };
        let expr = Expr::binary(op, Expr::int(n), Expr::int(0));
        let result = eval(&expr, &State::new()).map_err(|e| e.kind);
        prop_assert_eq!(result, Err(EvalErrorKind::DivisionByZero { op }));
    }

    #[test]
    fn for_runs_once_per_value_in_range(lo in -20i64..20, hi in -20i64..20) {
        let program = Program::new(
            "count",
            ["n"],
            Stmt::for_range(
                "i",
                Expr::int(lo),
                Expr::int(hi),
                Stmt::assign("n", Expr::add(Expr::var("n"), Expr::int(1))),
            ),
        );
        let state = quiet_interpreter().run(&program).map_err(|e| e.kind);
        let expected = (hi - lo + 1).max(0);
        prop_assert_eq!(state.map(|s| s.get("n")), Ok(Some(expected)));
    }

    #[test]
    fn latest_write_wins(values in prop::collection::vec(any::<i64>(), 1..20)) {
        let program = Program::new(
            "writes",
            ["x"],
            Stmt::seq(values.iter().map(|&v| Stmt::assign("x", Expr::int(v)))),
        );
        let state = quiet_interpreter().run(&program).map_err(|e| e.kind);
        prop_assert_eq!(state.map(|s| s.get("x")), Ok(values.last().copied()));
    }

    #[test]
    fn integer_arithmetic_matches_checked_i64(a in any::<i64>(), b in any::<i64>()) {
        let sum = eval(&Expr::add(Expr::int(a), Expr::int(b)), &State::new()).ok();
        prop_assert_eq!(sum, a.checked_add(b).map(Value::Int));
    }
}
