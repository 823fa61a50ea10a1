//! Evaluator and executor tests.

mod property_tests;

use crate::{buffer_handler, scripted_handler, Interpreter, SharedPrintHandler};

/// Interpreter that captures output and reads from `input`.
fn capturing_interpreter(input: &[&str]) -> (Interpreter, SharedPrintHandler) {
    let output = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(output.clone())
        .input_handler(scripted_handler(input.iter().copied()))
        .build();
    (interpreter, output)
}
