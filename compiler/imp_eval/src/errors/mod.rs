//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured category; factory functions
//! (e.g. `division_by_zero()`) are the only way errors are built, so
//! `EvalError::message` always equals `kind.to_string()`.
//!
//! All of these are fatal to the running program. They propagate through
//! `eval` and `exec` with `?` and end the `run` call.

use std::fmt;

use imp_ir::{BinaryOp, Name};

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Lookup of a name with no binding.
    UnboundName { name: String },
    /// An operand, condition or assigned value has the wrong kind.
    ///
    /// `context` names the operator or statement that rejected it.
    TypeMismatch {
        context: String,
        expected: &'static str,
        got: &'static str,
    },
    /// Integer divide or modulo with a zero right operand.
    DivisionByZero { op: BinaryOp },
    /// Checked `i64` arithmetic overflowed.
    IntegerOverflow { operation: &'static str },
    /// The input source ended while `read` was waiting for a number.
    InputClosed { name: String },
    /// A loop ran more iterations than the configured budget.
    IterationBudgetExceeded { limit: u64 },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundName { name } => write!(f, "unbound name: {name}"),
            Self::TypeMismatch {
                context,
                expected,
                got,
            } => write!(
                f,
                "type mismatch in {context}: expected {expected}, got {got}"
            ),
            Self::DivisionByZero { op } => {
                write!(f, "division by zero in operator `{}`", op.as_symbol())
            }
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::InputClosed { name } => {
                write!(f, "input closed while reading a number into {name}")
            }
            Self::IterationBudgetExceeded { limit } => {
                write!(f, "loop exceeded the iteration budget of {limit}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Secondary context, innermost first (e.g. the program being run).
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// Lookup of a name with no binding.
#[cold]
pub fn unbound_name(name: &Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundName {
        name: name.to_string(),
    })
}

/// Value of the wrong kind in `context`.
#[cold]
pub fn type_mismatch(
    context: impl Into<String>,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        got,
    })
}

/// Divide or modulo by zero.
#[cold]
pub fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero { op })
}

/// Integer overflow in `operation`.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

/// Input ended while reading into `name`.
#[cold]
pub fn input_closed(name: &Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InputClosed {
        name: name.to_string(),
    })
}

/// Loop iteration budget exhausted.
#[cold]
pub fn iteration_budget_exceeded(limit: u64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IterationBudgetExceeded { limit })
}

#[cfg(test)]
mod tests;
