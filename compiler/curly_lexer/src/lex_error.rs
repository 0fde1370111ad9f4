//! Lexer error types.

use std::fmt;

use curly_diagnostic::{Diagnostic, ErrorCode};
use curly_ir::Span;

/// What went wrong while lexing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token, e.g. `$` or `@`.
    UnexpectedChar(char),
    /// A digit sequence that does not parse as an `f64`.
    InvalidNumber,
    /// Source text past the 4 GiB offset limit.
    SourceTooLarge,
}

/// A lexer error with its source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    #[cold]
    pub fn unexpected_char(ch: char, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedChar(ch),
            span,
        }
    }

    #[cold]
    pub fn invalid_number(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::InvalidNumber,
            span,
        }
    }

    #[cold]
    pub fn source_too_large(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::SourceTooLarge,
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
            LexErrorKind::InvalidNumber => ErrorCode::E0002,
            LexErrorKind::SourceTooLarge => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::UnexpectedChar(ch) => {
                let diag = diag.with_label(self.span, "not part of any token");
                if ch == '"' || ch == '\'' {
                    diag.with_note("string literals are not supported")
                } else {
                    diag
                }
            }
            LexErrorKind::InvalidNumber => diag.with_label(self.span, "invalid number"),
            LexErrorKind::SourceTooLarge => diag.with_note("source files are limited to 4 GiB"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::UnexpectedChar(ch) => write!(f, "unexpected character {ch:?}"),
            LexErrorKind::InvalidNumber => write!(f, "invalid number literal"),
            LexErrorKind::SourceTooLarge => write!(f, "source too large to lex"),
        }
    }
}

impl std::error::Error for LexError {}
