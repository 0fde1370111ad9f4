//! Parse error types.
//!
//! Errors carry an [`ErrorContext`] naming the construct being parsed, so
//! messages read "expected '{', found identifier 'x' while parsing a lambda
//! literal".

use std::fmt;

use curly_diagnostic::{Diagnostic, ErrorCode};
use curly_ir::Span;

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// A top-level statement.
    Statement,
    /// An expression in operand position.
    Expression,
    /// A list literal `[a, b]`.
    ListLiteral,
    /// The parameter list of a lambda.
    LambdaParams,
    /// The braced body of a lambda.
    LambdaBody,
    /// The argument list of a call.
    CallArguments,
    /// A parenthesized expression.
    Parenthesized,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Statement => "a statement",
            Self::Expression => "an expression",
            Self::ListLiteral => "a list literal",
            Self::LambdaParams => "lambda parameters",
            Self::LambdaBody => "a lambda body",
            Self::CallArguments => "call arguments",
            Self::Parenthesized => "a parenthesized expression",
        }
    }

    /// Short label for the diagnostic snippet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Statement => "statement",
            Self::Expression => "expression",
            Self::ListLiteral => "list literal",
            Self::LambdaParams => "lambda parameters",
            Self::LambdaBody => "lambda body",
            Self::CallArguments => "call arguments",
            Self::Parenthesized => "parenthesized expression",
        }
    }
}

/// Structured parse error kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The grammar required `expected` but the input had `found`.
    UnexpectedToken { expected: String, found: String },
    /// A lambda names the same parameter twice.
    DuplicateParam { name: String },
}

/// A grammar violation with its position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn unexpected_token(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.into(),
            },
            span,
            context: None,
        }
    }

    #[cold]
    pub fn duplicate_param(name: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::DuplicateParam { name: name.into() },
            span,
            context: Some(ErrorContext::LambdaParams),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::DuplicateParam { .. } => ErrorCode::E1002,
        }
    }

    /// Message without the context suffix.
    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                format!("expected {expected}, found {found}")
            }
            ParseErrorKind::DuplicateParam { name } => {
                format!("duplicate parameter '{name}'")
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match (&self.kind, self.context) {
            (ParseErrorKind::DuplicateParam { .. }, _) => "already declared in this lambda",
            (_, Some(context)) => context.label(),
            (_, None) => "here",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);

        match (&self.kind, self.context) {
            (ParseErrorKind::UnexpectedToken { .. }, Some(ErrorContext::LambdaBody)) => diag
                .with_note("a lambda body is a single expression in braces: lambda x { x + 1 }"),
            _ => diag,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        if let Some(context) = self.context {
            write!(f, " while parsing {}", context.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
