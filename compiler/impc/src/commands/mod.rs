//! CLI command implementations.

use imp_eval::{
    stdin_handler, stdout_handler, EvalError, Interpreter, SharedInputHandler, SharedPrintHandler,
};

use crate::programs::{self, Sample};

/// Options accepted by `imp run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the final state after a successful run.
    pub dump_state: bool,
    /// Per-loop iteration budget.
    pub max_iterations: Option<u64>,
}

impl RunOptions {
    /// Parse the flags following the program name.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = RunOptions::default();
        for arg in args {
            if arg == "--dump-state" {
                options.dump_state = true;
            } else if let Some(limit) = arg.strip_prefix("--max-iterations=") {
                let limit = limit
                    .parse::<u64>()
                    .map_err(|e| format!("invalid --max-iterations value '{limit}': {e}"))?;
                options.max_iterations = Some(limit);
            } else {
                return Err(format!("unknown option '{arg}'"));
            }
        }
        Ok(options)
    }

    /// Interpreter configured with these options and the given handlers.
    pub fn interpreter(
        &self,
        print_handler: SharedPrintHandler,
        input_handler: SharedInputHandler,
    ) -> Interpreter {
        let mut builder = Interpreter::builder()
            .print_handler(print_handler)
            .input_handler(input_handler);
        if let Some(limit) = self.max_iterations {
            builder = builder.max_loop_iterations(limit);
        }
        builder.build()
    }
}

/// Print the catalog.
pub fn list_programs() {
    for sample in programs::all() {
        println!("  {:<12} {}", sample.name, sample.description);
    }
}

/// Print a program in readable form.
pub fn show_program(name: &str) -> Result<(), String> {
    let sample = find_sample(name)?;
    print!("{}", sample.program());
    Ok(())
}

/// Run a program against stdin/stdout.
pub fn run_program(name: &str, options: &RunOptions) -> Result<(), String> {
    let sample = find_sample(name)?;
    tracing::debug!(program = sample.name, ?options, "running sample");
    let interpreter = options.interpreter(stdout_handler(), stdin_handler());
    let state = interpreter
        .run(&sample.program())
        .map_err(|e| render_error(&e))?;
    if options.dump_state {
        print!("{state}");
    }
    Ok(())
}

fn find_sample(name: &str) -> Result<&'static Sample, String> {
    programs::find(name)
        .ok_or_else(|| format!("unknown program '{name}' (see `imp list`)"))
}

/// Render a run failure for the terminal.
///
/// ```text
/// error: division by zero in operator `/`
///   = note: in program 'divider'
/// ```
pub fn render_error(err: &EvalError) -> String {
    let mut out = format!("error: {err}");
    for note in &err.notes {
        out.push_str("\n  = note: ");
        out.push_str(note);
    }
    out
}

#[cfg(test)]
mod tests;
