//! Command handlers for the `curly` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! files and reporting errors live here.

use std::io::IsTerminal;

use curly_diagnostic::emitter::{ColorMode, Emitter};

use crate::Error;

mod debug;
mod explain;
mod fmt;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use fmt::format_file;
pub use run::run_file;

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match crate::read_source(path) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

/// Color mode for stderr: never when `NO_COLOR` is set, else when it's a terminal.
pub(crate) fn color_mode() -> ColorMode {
    if std::env::var_os("NO_COLOR").is_some() {
        ColorMode::Never
    } else {
        ColorMode::Auto
    }
}

/// Render `error` against `source` on stderr.
pub(crate) fn report_error(path: &str, source: &str, error: &Error) {
    let diagnostics = error.diagnostics();
    if diagnostics.is_empty() {
        eprintln!("error: {error}");
        return;
    }

    let colors = color_mode().should_use_colors(std::io::stderr().is_terminal());
    let emitter = Emitter::new(path, source, colors);
    let mut stderr = std::io::stderr().lock();
    if let Err(e) = emitter.emit_all(&diagnostics, &mut stderr) {
        // Fall back to one-line summaries if the snippet renderer failed.
        tracing::warn!(error = %e, "failed to render diagnostics");
        for diag in &diagnostics {
            eprintln!("{}", emitter.summary(diag));
        }
    }
}
