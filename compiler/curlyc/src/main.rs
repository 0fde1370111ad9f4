//! Curly interpreter CLI.

use curlyc::commands::{explain_error, format_file, lex_file, parse_file, run_file};

fn main() {
    curlyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: curly run <file.curly>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "fmt" => {
            let check = args.iter().skip(2).any(|a| a == "--check");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: curly fmt <file.curly> [--check]");
                std::process::exit(1);
            };
            format_file(path, check);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: curly parse <file.curly>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: curly lex <file.curly>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Curly {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: curly --explain <ERROR_CODE>");
                eprintln!("Example: curly --explain E6004");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("curly"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Curly interpreter");
    println!();
    println!("Usage: curly <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.curly>     Run a Curly program");
    println!("  fmt <file.curly>     Print a program in canonical form");
    println!("  parse <file.curly>   Parse and display statements");
    println!("  lex <file.curly>     Tokenize and display tokens");
    println!("  --explain <code>     Explain an error code (e.g., E6004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("fmt options:");
    println!("  --check              Exit with status 1 if the file is not formatted");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing (e.g. RUST_LOG=curly_eval=debug)");
    println!("  CURLY_LOG_TREE       Show tracing spans as a tree");
    println!("  NO_COLOR             Disable colored diagnostics");
    println!();
    println!("A bare path ending in .curly is run directly: curly demo.curly");
}
