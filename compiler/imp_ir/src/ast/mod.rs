//! Expression, statement and program trees.
//!
//! Trees are plain owned data (`Box` children). They are built once and read
//! many times: a loop body is walked again on every iteration, so nothing in
//! here carries evaluation state.

mod display;
mod operators;

pub use operators::{BinaryOp, UnaryOp};

use crate::Name;

/// A literal constant appearing in an expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constant {
    Int(i64),
    Bool(bool),
}

/// Expressions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// A literal value.
    Const(Constant),
    /// Variable reference. Variables always hold integers.
    Var(Name),
    /// Binary operation. Both operands are always evaluated, left first.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operation.
    Unary { op: UnaryOp, operand: Box<Expr> },
}

impl Expr {
    pub fn int(value: i64) -> Self {
        Expr::Const(Constant::Int(value))
    }

    pub fn bool(value: bool) -> Self {
        Expr::Const(Constant::Bool(value))
    }

    pub fn var(name: impl Into<Name>) -> Self {
        Expr::Var(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[allow(
        clippy::should_implement_trait,
        reason = "constructor named after the IMP operator, not an operator overload"
    )]
    pub fn add(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Add, left, right)
    }

    #[allow(
        clippy::should_implement_trait,
        reason = "constructor named after the IMP operator, not an operator overload"
    )]
    pub fn sub(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Sub, left, right)
    }

    #[allow(
        clippy::should_implement_trait,
        reason = "constructor named after the IMP operator, not an operator overload"
    )]
    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Mul, left, right)
    }

    #[allow(
        clippy::should_implement_trait,
        reason = "constructor named after the IMP operator, not an operator overload"
    )]
    pub fn div(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Div, left, right)
    }

    pub fn modulo(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Mod, left, right)
    }

    pub fn lt(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Lt, left, right)
    }

    pub fn le(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::LtEq, left, right)
    }

    pub fn gt(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Gt, left, right)
    }

    pub fn ge(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::GtEq, left, right)
    }

    pub fn equals(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Eq, left, right)
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    #[allow(
        clippy::should_implement_trait,
        reason = "constructor named after the IMP operator, not an operator overload"
    )]
    pub fn not(operand: Expr) -> Self {
        Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }
    }
}

/// Statements.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    Skip,
    Assign(Name, Expr),
    /// Run the first statement, then the second on the resulting state.
    Seq(Box<Stmt>, Box<Stmt>),
    IfThenElse {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Box<Stmt>,
    },
    IfThen {
        cond: Expr,
        body: Box<Stmt>,
    },
    /// Pre-test loop.
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    /// Post-test loop; stops once `cond` holds.
    RepeatUntil {
        body: Box<Stmt>,
        cond: Expr,
    },
    /// Post-test loop; continues while `cond` holds.
    DoWhile {
        body: Box<Stmt>,
        cond: Expr,
    },
    /// Counted loop over `low..=high`. `high` is re-evaluated before every
    /// iteration.
    For {
        var: Name,
        low: Expr,
        high: Expr,
        body: Box<Stmt>,
    },
    /// Read one integer from the input collaborator.
    ReadNum(Name),
    /// Print an integer expression.
    WriteNum(Expr),
    /// Print a literal string.
    WriteStr(String),
}

impl Stmt {
    pub fn assign(name: impl Into<Name>, value: Expr) -> Self {
        Stmt::Assign(name.into(), value)
    }

    /// Chain statements into a right-nested `Seq`.
    ///
    /// An empty list is `Skip`; a single statement is returned as is.
    pub fn seq(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        let mut stmts: Vec<Stmt> = stmts.into_iter().collect();
        let Some(mut chain) = stmts.pop() else {
            return Stmt::Skip;
        };
        while let Some(stmt) = stmts.pop() {
            chain = Stmt::Seq(Box::new(stmt), Box::new(chain));
        }
        chain
    }

    pub fn if_then_else(cond: Expr, then_branch: Stmt, else_branch: Stmt) -> Self {
        Stmt::IfThenElse {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn if_then(cond: Expr, body: Stmt) -> Self {
        Stmt::IfThen {
            cond,
            body: Box::new(body),
        }
    }

    pub fn while_do(cond: Expr, body: Stmt) -> Self {
        Stmt::While {
            cond,
            body: Box::new(body),
        }
    }

    pub fn repeat_until(body: Stmt, cond: Expr) -> Self {
        Stmt::RepeatUntil {
            body: Box::new(body),
            cond,
        }
    }

    pub fn do_while(body: Stmt, cond: Expr) -> Self {
        Stmt::DoWhile {
            body: Box::new(body),
            cond,
        }
    }

    pub fn for_range(var: impl Into<Name>, low: Expr, high: Expr, body: Stmt) -> Self {
        Stmt::For {
            var: var.into(),
            low,
            high,
            body: Box::new(body),
        }
    }

    pub fn read_num(name: impl Into<Name>) -> Self {
        Stmt::ReadNum(name.into())
    }

    pub fn write_num(value: Expr) -> Self {
        Stmt::WriteNum(value)
    }

    pub fn write_str(text: impl Into<String>) -> Self {
        Stmt::WriteStr(text.into())
    }

    /// Short description of the statement kind, used in diagnostics.
    pub const fn describe(&self) -> &'static str {
        match self {
            Stmt::Skip => "skip",
            Stmt::Assign(..) => "assignment",
            Stmt::Seq(..) => "sequence",
            Stmt::IfThenElse { .. } => "if-then-else condition",
            Stmt::IfThen { .. } => "if-then condition",
            Stmt::While { .. } => "while condition",
            Stmt::RepeatUntil { .. } => "repeat-until condition",
            Stmt::DoWhile { .. } => "do-while condition",
            Stmt::For { .. } => "for bound",
            Stmt::ReadNum(_) => "read",
            Stmt::WriteNum(_) => "write",
            Stmt::WriteStr(_) => "write string",
        }
    }
}

/// A complete program.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    /// Diagnostic label; has no effect on execution.
    pub name: String,
    /// Declared variables, bound to 0 in this order before the body runs.
    pub vars: Vec<Name>,
    pub body: Stmt,
}

impl Program {
    pub fn new<N: Into<Name>>(
        name: impl Into<String>,
        vars: impl IntoIterator<Item = N>,
        body: Stmt,
    ) -> Self {
        Program {
            name: name.into(),
            vars: vars.into_iter().map(Into::into).collect(),
            body,
        }
    }
}

#[cfg(test)]
mod tests;
