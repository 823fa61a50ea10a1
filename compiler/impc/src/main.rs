//! IMP interpreter CLI

use impc::commands::{list_programs, run_program, show_program, RunOptions};

fn main() {
    impc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "list" => {
            list_programs();
            Ok(())
        }
        "show" => {
            let Some(name) = args.get(2) else {
                eprintln!("Usage: imp show <program>");
                std::process::exit(1);
            };
            show_program(name)
        }
        "run" => {
            let Some(name) = args.get(2) else {
                eprintln!("Usage: imp run <program> [--dump-state] [--max-iterations=N]");
                std::process::exit(1);
            };
            RunOptions::parse(&args[3..]).and_then(|options| run_program(name, &options))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("IMP interpreter");
    println!();
    println!("Usage: imp <command> [options]");
    println!();
    println!("Commands:");
    println!("  list                 List the built-in programs");
    println!("  show <program>       Print a program");
    println!("  run <program>        Run a program (reads numbers from stdin)");
    println!("  help                 Show this help message");
    println!();
    println!("Run options:");
    println!("  --dump-state         Print the final variable bindings");
    println!("  --max-iterations=N   Fail any loop that runs more than N times");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=imp_eval=debug) for execution traces.");
}
