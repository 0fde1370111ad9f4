//! The `explain` command: describe an error code.

use curly_diagnostic::ErrorCode;

pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::from_code(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E6004");
        std::process::exit(1);
    };

    let phase = if code.is_lexer_error() {
        "lexer"
    } else if code.is_parser_error() {
        "parser"
    } else {
        "runtime"
    };
    println!("{code}: {}", code.description());
    println!("Reported by the {phase}.");
}
