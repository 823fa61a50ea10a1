//! Expression evaluation.

use imp_ir::Expr;
use imp_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::Value;

/// Evaluate `expr` against `env`.
///
/// Pure: no I/O and no changes to `env`. Binary operands are evaluated left
/// before right and both are always evaluated (`and` does not
/// short-circuit), so the only observable effect of ordering is which error
/// is reported first.
pub fn eval(expr: &Expr, env: &Environment) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        Expr::Const(constant) => Ok(Value::from(*constant)),
        Expr::Var(name) => env.lookup(name).map(Value::Int),
        Expr::Binary { op, left, right } => {
            let left = eval(left, env)?;
            let right = eval(right, env)?;
            evaluate_binary(left, right, *op)
        }
        Expr::Unary { op, operand } => evaluate_unary(eval(operand, env)?, *op),
    })
}
