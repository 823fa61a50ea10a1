//! Unary operator implementations.

use imp_ir::UnaryOp;

use crate::errors::{type_mismatch, EvalResult};
use crate::value::Value;

/// Evaluate a unary operation on an already-evaluated operand.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        (Value::Int(_), UnaryOp::Not) => Err(type_mismatch(
            format!("operator `{}`", op.as_symbol()),
            "bool",
            value.type_name(),
        )),
    }
}
