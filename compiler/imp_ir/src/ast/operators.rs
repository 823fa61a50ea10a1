//! Binary and unary operators.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,

    // Logical
    And,
}

impl BinaryOp {
    /// Returns the concrete-syntax symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "=",
            Self::And => "and",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 3: `*` `/` `%`
    /// - 4: `+` `-`
    /// - 7: `<` `>` `<=` `>=`
    /// - 8: `=`
    /// - 12: `and`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Add | Self::Sub => 4,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 7,
            Self::Eq => 8,
            Self::And => 12,
        }
    }

    /// Whether the operator takes integer operands.
    ///
    /// Everything except `and` does; `and` takes booleans.
    pub const fn takes_integers(self) -> bool {
        !matches!(self, Self::And)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    /// Returns the concrete-syntax symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
        }
    }
}
