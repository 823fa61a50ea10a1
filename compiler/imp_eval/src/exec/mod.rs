//! Statement execution.
//!
//! `exec_stmt` updates the state in place; `Interpreter::exec` wraps it in
//! the functional `State -> State` shape. Loops live in `control` and never
//! recurse per iteration.

mod control;

use imp_ir::{Expr, Name, Stmt};
use imp_stack::ensure_sufficient_stack;

use crate::environment::State;
use crate::errors::{input_closed, EvalResult};
use crate::eval::eval;
use crate::interpreter::Interpreter;

impl Interpreter {
    pub(crate) fn exec_stmt(&self, stmt: &Stmt, state: &mut State) -> EvalResult<()> {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Skip => Ok(()),
            Stmt::Assign(name, value) => {
                let value = eval(value, state)?.expect_int(|| format!("assignment to `{name}`"))?;
                tracing::trace!(name = %name, value, "assign");
                state.bind(name, value);
                Ok(())
            }
            Stmt::Seq(first, rest) => {
                self.exec_stmt(first, state)?;
                // Right-nested chains run iteratively.
                let mut current: &Stmt = rest;
                while let Stmt::Seq(first, rest) = current {
                    self.exec_stmt(first, state)?;
                    current = rest;
                }
                self.exec_stmt(current, state)
            }
            Stmt::IfThenElse {
                cond,
                then_branch,
                else_branch,
            } => {
                if condition(cond, state, stmt)? {
                    self.exec_stmt(then_branch, state)
                } else {
                    self.exec_stmt(else_branch, state)
                }
            }
            Stmt::IfThen { cond, body } => {
                if condition(cond, state, stmt)? {
                    self.exec_stmt(body, state)?;
                }
                Ok(())
            }
            Stmt::While { cond, body } => self.exec_while(stmt, cond, body, state),
            Stmt::RepeatUntil { body, cond } => self.exec_repeat_until(stmt, body, cond, state),
            Stmt::DoWhile { body, cond } => self.exec_do_while(stmt, body, cond, state),
            Stmt::For {
                var,
                low,
                high,
                body,
            } => self.exec_for(stmt, var, low, high, body, state),
            Stmt::ReadNum(name) => {
                let value = self.read_number(name)?;
                state.bind(name, value);
                Ok(())
            }
            Stmt::WriteNum(value) => {
                let value = eval(value, state)?.expect_int(|| stmt.describe().to_string())?;
                self.print_handler.println(&value.to_string());
                Ok(())
            }
            Stmt::WriteStr(text) => {
                self.print_handler.println(text);
                Ok(())
            }
        })
    }

    /// Read lines until one parses as a base-10 integer.
    ///
    /// Malformed lines print the retry prompt and are skipped. Only the end
    /// of input is an error.
    fn read_number(&self, name: &Name) -> EvalResult<i64> {
        loop {
            let Some(line) = self.input_handler.read_line() else {
                return Err(input_closed(name));
            };
            let text = line.trim();
            match text.parse::<i64>() {
                Ok(value) => {
                    tracing::trace!(name = %name, value, "read");
                    return Ok(value);
                }
                Err(e) => {
                    tracing::warn!(input = text, "malformed number: {e}");
                    self.print_handler.println(&self.read_prompt);
                }
            }
        }
    }
}

/// Evaluate a condition that must be boolean.
///
/// A wrong-kind result is reported against the statement owning the
/// condition.
#[inline]
fn condition(cond: &Expr, state: &State, owner: &Stmt) -> EvalResult<bool> {
    eval(cond, state)?.expect_bool(|| owner.describe().to_string())
}

/// Evaluate an expression that must be an integer.
#[inline]
fn integer(expr: &Expr, state: &State, owner: &Stmt) -> EvalResult<i64> {
    eval(expr, state)?.expect_int(|| owner.describe().to_string())
}
