//! The `run` command.

use curly_eval::stdout_handler;

use super::{read_file, report_error};

/// Run a Curly program, printing to stdout. Exits with status 1 on any error.
pub fn run_file(path: &str) {
    let source = read_file(path);
    if let Err(error) = crate::run_source(&source, stdout_handler()) {
        report_error(path, &source, &error);
        std::process::exit(1);
    }
}
