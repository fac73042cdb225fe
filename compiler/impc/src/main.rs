//! IMP interpreter CLI.

use impc::commands::{lex_file, parse_file, run_file, run_repl};
use impc::init_tracing;
use impc::reporting::ReportOptions;

fn main() {
    init_tracing();

    let mut options = ReportOptions::default();
    let args: Vec<String> = std::env::args()
        .skip(1)
        .filter(|arg| {
            if arg == "--no-color" {
                options.color = false;
                false
            } else {
                true
            }
        })
        .collect();

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    let ok = match command.as_str() {
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: impc run <file.imp>");
                std::process::exit(1);
            };
            run_file(path, options)
        }
        "repl" => run_repl(options),
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: impc parse <file.imp>");
                std::process::exit(1);
            };
            parse_file(path, options)
        }
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: impc lex <file.imp>");
                std::process::exit(1);
            };
            lex_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("impc {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            // A bare source path is run.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("imp"))
            {
                run_file(command, options)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                false
            }
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("IMP interpreter");
    println!();
    println!("Usage: impc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.imp>     Run an IMP program");
    println!("  repl               Start an interactive session");
    println!("  parse <file.imp>   Parse and print the program in canonical form");
    println!("  lex <file.imp>     Tokenize and display tokens");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Options:");
    println!("  --no-color         Disable colored error reports");
    println!();
    println!("Environment:");
    println!("  IMP_LOG=<filter>   Enable tracing, e.g. IMP_LOG=imp_eval=trace");
    println!();
    println!("Examples:");
    println!("  impc run programs/gcd.imp");
    println!("  impc programs/gcd.imp");
    println!("  impc parse programs/closures.imp");
}
