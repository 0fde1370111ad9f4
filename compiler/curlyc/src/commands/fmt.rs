//! The `fmt` command: print a file in canonical form.
//!
//! Comments are not part of the syntax tree, so output goes to stdout
//! rather than back to the file.

use curly_ir::StringInterner;

use super::{read_file, report_error};

/// Format `path`. With `check`, print nothing and exit with status 1 if
/// the file is not already formatted.
pub fn format_file(path: &str, check: bool) {
    let source = read_file(path);
    let interner = StringInterner::new();
    let parsed = match crate::parse_source(&source, &interner) {
        Ok(parsed) => parsed,
        Err(error) => {
            report_error(path, &source, &error);
            std::process::exit(1);
        }
    };

    let formatted = curly_fmt::format_program(&parsed.program, &parsed.arena, &interner);
    if check {
        if formatted != source {
            eprintln!("{path}: not formatted");
            std::process::exit(1);
        }
    } else {
        print!("{formatted}");
    }
}
