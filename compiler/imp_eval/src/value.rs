//! Runtime values.

use std::fmt;

use imp_ir::Constant;

use crate::errors::{type_mismatch, EvalResult};

/// A runtime value.
///
/// Variables only ever hold integers; booleans exist as intermediate results
/// of comparisons and logical operators. There is no coercion between the
/// two variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
}

impl Value {
    /// Name of the value's type, as used in diagnostics.
    pub const fn type_name(self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
        }
    }

    /// Extract an integer, or fail with a type mismatch in `context`.
    ///
    /// `context` is only called on failure.
    #[inline]
    pub fn expect_int(self, context: impl FnOnce() -> String) -> EvalResult<i64> {
        match self {
            Value::Int(n) => Ok(n),
            Value::Bool(_) => Err(type_mismatch(context(), "int", self.type_name())),
        }
    }

    /// Extract a boolean, or fail with a type mismatch in `context`.
    #[inline]
    pub fn expect_bool(self, context: impl FnOnce() -> String) -> EvalResult<bool> {
        match self {
            Value::Bool(b) => Ok(b),
            Value::Int(_) => Err(type_mismatch(context(), "bool", self.type_name())),
        }
    }
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        match constant {
            Constant::Int(n) => Value::Int(n),
            Constant::Bool(b) => Value::Bool(b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
