use super::{render_error, run_program, show_program, RunOptions};
use imp_eval::{buffer_handler, division_by_zero, scripted_handler, EvalErrorKind};
use imp_ir::{BinaryOp, Expr, Program, Stmt};
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn no_flags_is_default() {
    assert_eq!(RunOptions::parse(&[]), Ok(RunOptions::default()));
}

#[test]
fn parses_all_flags() {
    assert_eq!(
        RunOptions::parse(&args(&["--max-iterations=50", "--dump-state"])),
        Ok(RunOptions {
            dump_state: true,
            max_iterations: Some(50),
        })
    );
}

#[test]
fn rejects_bad_iteration_limit() {
    let err = RunOptions::parse(&args(&["--max-iterations=lots"]));
    assert!(matches!(err, Err(ref msg) if msg.starts_with("invalid --max-iterations value 'lots'")));
}

#[test]
fn rejects_unknown_flag() {
    assert_eq!(
        RunOptions::parse(&args(&["--fast"])),
        Err("unknown option '--fast'".to_string())
    );
}

#[test]
fn interpreter_applies_iteration_budget() {
    let options = RunOptions {
        dump_state: false,
        max_iterations: Some(3),
    };
    let interpreter = options.interpreter(buffer_handler(), scripted_handler(Vec::<String>::new()));
    let program = Program::new(
        "spin",
        ["x"],
        Stmt::while_do(Expr::bool(true), Stmt::Skip),
    );
    assert_eq!(
        interpreter.run(&program).map(|_| ()).map_err(|e| e.kind),
        Err(EvalErrorKind::IterationBudgetExceeded { limit: 3 })
    );
}

#[test]
fn interpreter_uses_given_handlers() {
    let output = buffer_handler();
    let interpreter = RunOptions::default().interpreter(output.clone(), scripted_handler(["9"]));
    let program = Program::new(
        "echo",
        ["n"],
        Stmt::seq([Stmt::read_num("n"), Stmt::write_num(Expr::var("n"))]),
    );
    assert!(interpreter.run(&program).is_ok());
    assert_eq!(output.get_output(), "9\n");
}

#[test]
fn unknown_program_is_an_error() {
    let expected = Err("unknown program 'nope' (see `imp list`)".to_string());
    assert_eq!(show_program("nope"), expected);
    assert_eq!(run_program("nope", &RunOptions::default()), expected);
}

#[test]
fn renders_error_with_notes() {
    let err = division_by_zero(BinaryOp::Div).with_note("in program 'divider'");
    assert_eq!(
        render_error(&err),
        "error: division by zero in operator `/`\n  = note: in program 'divider'"
    );
}

#[test]
fn renders_error_without_notes() {
    let err = division_by_zero(BinaryOp::Mod);
    assert_eq!(render_error(&err), "error: division by zero in operator `%`");
}
