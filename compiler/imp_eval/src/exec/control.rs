//! Loop execution.
//!
//! All four loop forms run as native Rust loops, so iteration count never
//! turns into stack depth. `repeat`, `do` and `for` follow the desugarings
//! into `while`:
//!
//! ```text
//! repeat B until C      ==  B; while not C do B end
//! do B while C          ==  B; while C do B end
//! for i := L to H do B  ==  i := L; while i <= H do B; i := i + 1 end
//! ```
//!
//! `H` is re-evaluated before every iteration, exactly as the `while` test
//! would. The loop variable stays bound after the loop.

use imp_ir::{Expr, Name, Stmt};

use super::{condition, integer};
use crate::environment::State;
use crate::errors::{integer_overflow, iteration_budget_exceeded, EvalResult};
use crate::interpreter::Interpreter;

/// Counts body executions of one loop statement against the optional budget.
struct LoopCounter {
    kind: &'static str,
    iterations: u64,
    limit: Option<u64>,
}

impl LoopCounter {
    fn new(kind: &'static str, limit: Option<u64>) -> Self {
        LoopCounter {
            kind,
            iterations: 0,
            limit,
        }
    }

    /// Record the start of one more iteration.
    #[inline]
    fn tick(&mut self) -> EvalResult<()> {
        self.iterations = self.iterations.saturating_add(1);
        match self.limit {
            Some(limit) if self.iterations > limit => Err(iteration_budget_exceeded(limit)),
            _ => Ok(()),
        }
    }

    fn finish(self) {
        tracing::debug!(kind = self.kind, iterations = self.iterations, "loop finished");
    }
}

impl Interpreter {
    pub(super) fn exec_while(
        &self,
        stmt: &Stmt,
        cond: &Expr,
        body: &Stmt,
        state: &mut State,
    ) -> EvalResult<()> {
        let mut counter = LoopCounter::new("while", self.max_loop_iterations);
        while condition(cond, state, stmt)? {
            counter.tick()?;
            self.exec_stmt(body, state)?;
        }
        counter.finish();
        Ok(())
    }

    pub(super) fn exec_repeat_until(
        &self,
        stmt: &Stmt,
        body: &Stmt,
        cond: &Expr,
        state: &mut State,
    ) -> EvalResult<()> {
        let mut counter = LoopCounter::new("repeat", self.max_loop_iterations);
        loop {
            counter.tick()?;
            self.exec_stmt(body, state)?;
            if condition(cond, state, stmt)? {
                break;
            }
        }
        counter.finish();
        Ok(())
    }

    pub(super) fn exec_do_while(
        &self,
        stmt: &Stmt,
        body: &Stmt,
        cond: &Expr,
        state: &mut State,
    ) -> EvalResult<()> {
        let mut counter = LoopCounter::new("do", self.max_loop_iterations);
        loop {
            counter.tick()?;
            self.exec_stmt(body, state)?;
            if !condition(cond, state, stmt)? {
                break;
            }
        }
        counter.finish();
        Ok(())
    }

    pub(super) fn exec_for(
        &self,
        stmt: &Stmt,
        var: &Name,
        low: &Expr,
        high: &Expr,
        body: &Stmt,
        state: &mut State,
    ) -> EvalResult<()> {
        let start = integer(low, state, stmt)?;
        state.bind(var, start);
        let mut counter = LoopCounter::new("for", self.max_loop_iterations);
        loop {
            // The body may assign the loop variable; always re-read it.
            let current = state.lookup(var)?;
            if current > integer(high, state, stmt)? {
                break;
            }
            counter.tick()?;
            self.exec_stmt(body, state)?;
            let next = state
                .lookup(var)?
                .checked_add(1)
                .ok_or_else(|| integer_overflow("addition"))?;
            state.bind(var, next);
        }
        counter.finish();
        Ok(())
    }
}
