//! The interpreter: statement execution plus the program driver.

mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_READ_PROMPT};

use imp_ir::{Program, Stmt};

use crate::environment::State;
use crate::errors::EvalResult;
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;

/// Executes IMP statements and programs.
///
/// Holds only configuration and I/O handles; all program state lives in the
/// `State` threaded through `exec`, so one interpreter can run any number of
/// programs one after another.
pub struct Interpreter {
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input_handler: SharedInputHandler,
    /// Per-loop iteration cap; `None` lets loops run forever.
    pub(crate) max_loop_iterations: Option<u64>,
    /// Printed before re-reading after a malformed number.
    pub(crate) read_prompt: String,
}

impl Interpreter {
    /// Interpreter writing to stdout and reading from stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run a program from its initial state.
    ///
    /// Every declared variable starts at 0. Returns the final state, or the
    /// first error with a note naming the program.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(program = %program.name, vars = program.vars.len())
    )]
    pub fn run(&self, program: &Program) -> EvalResult<State> {
        let state = State::initial(&program.vars);
        let result = self.exec(&program.body, state);
        match &result {
            Ok(state) => tracing::debug!(bindings = state.len(), "program finished"),
            Err(e) => tracing::debug!(error = %e, "program failed"),
        }
        result.map_err(|e| e.with_note(format!("in program '{}'", program.name)))
    }

    /// Execute `stmt` against `state`, returning the resulting state.
    pub fn exec(&self, stmt: &Stmt, mut state: State) -> EvalResult<State> {
        self.exec_stmt(stmt, &mut state)?;
        Ok(state)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
