//! `InterpreterBuilder` for creating interpreters with non-default I/O or limits.

use super::Interpreter;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Printed after a line that does not parse as an integer.
pub const DEFAULT_READ_PROMPT: &str = "Not a number, try again:";

/// Builder for `Interpreter`.
///
/// Defaults: stdout output, stdin input, no loop budget.
#[must_use]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    max_loop_iterations: Option<u64>,
    read_prompt: String,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            input_handler: None,
            max_loop_iterations: None,
            read_prompt: DEFAULT_READ_PROMPT.to_string(),
        }
    }

    /// Where `write` statements go.
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Where `read` statements take lines from.
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Fail any single loop that starts more than `limit` iterations.
    pub fn max_loop_iterations(mut self, limit: u64) -> Self {
        self.max_loop_iterations = Some(limit);
        self
    }

    /// Text printed before re-reading after a malformed number.
    pub fn read_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.read_prompt = prompt.into();
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
            max_loop_iterations: self.max_loop_iterations,
            read_prompt: self.read_prompt,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
