//! Curly interpreter driver.
//!
//! Runs the phases in order: lex, parse, evaluate. Lex and parse errors
//! stop the pipeline before anything runs; the first runtime error stops
//! evaluation with earlier output already written.

use std::sync::Once;

use curly_diagnostic::Diagnostic;
use curly_eval::{EvalError, InterpreterBuilder, SharedPrintHandler};
use curly_ir::StringInterner;
use curly_lexer::LexError;
use curly_parse::{ParseError, ParseOutput};

pub mod commands;

/// Everything that can stop a Curly program.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", io_message(.path, .source))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{} lexer error(s)", .0.len())]
    Lex(Vec<LexError>),
    #[error("{} parse error(s)", .0.len())]
    Parse(Vec<ParseError>),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Diagnostics to render against the source. Empty for I/O errors.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Io { .. } => Vec::new(),
            Error::Lex(errors) => errors.iter().map(LexError::to_diagnostic).collect(),
            Error::Parse(errors) => errors.iter().map(ParseError::to_diagnostic).collect(),
            Error::Eval(error) => vec![error.to_diagnostic()],
        }
    }
}

fn io_message(path: &str, error: &std::io::Error) -> String {
    match error.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}

/// Read a source file.
pub fn read_source(path: &str) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })
}

/// Lex and parse `source`, failing if either phase reported errors.
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<ParseOutput, Error> {
    let lexed = curly_lexer::lex(source, interner);
    if lexed.has_errors() {
        return Err(Error::Lex(lexed.errors));
    }

    let parsed = curly_parse::parse(&lexed.tokens, interner);
    if parsed.has_errors() {
        return Err(Error::Parse(parsed.errors));
    }
    Ok(parsed)
}

/// Run a whole program, sending `print` output to `print_handler`.
///
/// Programs communicate through `print`; the value of the last statement
/// is only logged, since closures die with the interpreter that made them.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn run_source(source: &str, print_handler: SharedPrintHandler) -> Result<(), Error> {
    let interner = StringInterner::new();
    let parsed = parse_source(source, &interner)?;
    tracing::debug!(
        statements = parsed.program.len(),
        exprs = parsed.arena.expr_count(),
        "parsed"
    );

    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
        .print_handler(print_handler)
        .build();
    let last = interpreter.eval_program(&parsed.program)?;
    tracing::debug!(%last, "finished");
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber once per process.
///
/// Does nothing unless `RUST_LOG` is set (e.g. `RUST_LOG=curly_eval=trace`).
/// With `CURLY_LOG_TREE` set, spans are drawn as an indented tree.
/// Output goes to stderr so it never mixes with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os("CURLY_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}
