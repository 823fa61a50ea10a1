//! Binary operator implementations.
//!
//! Direct enum-based dispatch: the value set is closed (Int, Bool), so the
//! match over operand pairs is exhaustive and checked at compile time.
//! Arithmetic, comparison and equality take two integers; `and` takes two
//! booleans. Nothing is coerced.

use imp_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, EvalError, EvalResult};
use crate::value::Value;

/// Checked arithmetic with overflow reported as an error.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division or remainder with a zero guard.
///
/// `i64::MIN / -1` is the one non-zero case that overflows.
#[inline]
fn checked_div<F>(divisor: i64, op: BinaryOp, f: F, op_name: &'static str) -> EvalResult
where
    F: FnOnce() -> Option<i64>,
{
    if divisor == 0 {
        Err(division_by_zero(op))
    } else {
        checked_arith(f(), op_name)
    }
}

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(a, b, op),
        _ => Err(operand_mismatch(op, left, right)),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(b, op, || a.checked_div(b), "division"),
        BinaryOp::Mod => checked_div(b, op, || a.checked_rem(b), "modulo"),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::And => Err(type_mismatch(operator_context(op), "bool", "int")),
    }
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        _ => Err(type_mismatch(operator_context(op), "int", "bool")),
    }
}

fn operator_context(op: BinaryOp) -> String {
    format!("operator `{}`", op.as_symbol())
}

/// Operands of different kinds. Reports the first one the operator rejects.
#[cold]
fn operand_mismatch(op: BinaryOp, left: Value, right: Value) -> EvalError {
    let expected = if op.takes_integers() { "int" } else { "bool" };
    let culprit = if left.type_name() == expected {
        right
    } else {
        left
    };
    type_mismatch(operator_context(op), expected, culprit.type_name())
}
