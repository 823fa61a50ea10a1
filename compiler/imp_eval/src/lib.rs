//! IMP Eval - evaluator and statement executor for IMP programs.
//!
//! # Architecture
//!
//! - `Value`: the closed Int/Bool value type
//! - `State`: variable bindings threaded through execution (`Environment`
//!   is the same type, passed by shared reference to expression evaluation)
//! - `eval`: pure expression evaluation
//! - `evaluate_binary` / `evaluate_unary`: enum-based operator dispatch
//! - `Interpreter`: statement execution and the program driver, configured
//!   through `InterpreterBuilder` with print and input handlers
//!
//! Every failure is an `EvalError` carrying a structured `EvalErrorKind`.
//! Errors are fatal to the running program; the one recovered condition is a
//! malformed line at `read`, which is retried.

mod environment;
pub mod errors;
mod eval;
mod exec;
mod input_handler;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{Environment, State};
pub use errors::{
    division_by_zero, input_closed, integer_overflow, iteration_budget_exceeded, type_mismatch,
    unbound_name, EvalError, EvalErrorKind, EvalResult,
};
pub use eval::eval;
pub use input_handler::{
    scripted_handler, stdin_handler, InputHandlerImpl, ScriptedInputHandler, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_READ_PROMPT};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;

use imp_ir::Program;

/// Run a program with the default interpreter (stdout output, stdin input).
pub fn run(program: &Program) -> EvalResult<State> {
    Interpreter::new().run(program)
}

#[cfg(test)]
mod tests;
