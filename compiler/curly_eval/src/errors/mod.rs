//! Runtime errors.
//!
//! Errors are built through the `#[cold]` factory functions below so that
//! call sites stay short and the error path stays out of the hot loop.

use std::fmt;

use curly_diagnostic::{Diagnostic, ErrorCode};
use curly_ir::{BinaryOp, Span};

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// What went wrong during evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Identifier not bound in any enclosing scope.
    UnboundName { name: String },
    /// Call target is not a lambda or builtin.
    NotCallable { type_name: &'static str },
    /// Wrong number of arguments.
    ArityMismatch {
        callee: String,
        expected: usize,
        got: usize,
    },
    /// `/` or `%` with a zero divisor.
    DivisionByZero { op: BinaryOp },
    /// Operator or builtin applied to the wrong kind of value.
    TypeMismatch {
        context: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Attempt to rebind a builtin name.
    ReservedName { name: String },
}

/// A runtime error with the span of the expression that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UnboundName { .. } => ErrorCode::E6001,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::DivisionByZero { .. } => ErrorCode::E6004,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::ReservedName { .. } => ErrorCode::E6006,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.label());
        }
        match &self.kind {
            EvalErrorKind::ReservedName { .. } => {
                diag.with_note("map, filter, list, print and len cannot be rebound")
            }
            EvalErrorKind::ArityMismatch { .. } => {
                diag.with_note("lambdas take exactly as many arguments as they have parameters")
            }
            _ => diag,
        }
    }

    fn label(&self) -> &'static str {
        match self.kind {
            EvalErrorKind::UnboundName { .. } => "not found in this scope",
            EvalErrorKind::NotCallable { .. } => "called here",
            EvalErrorKind::ArityMismatch { .. } => "in this call",
            EvalErrorKind::DivisionByZero { .. } => "divisor is zero",
            EvalErrorKind::TypeMismatch { .. } => "wrong kind of value",
            EvalErrorKind::ReservedName { .. } => "builtin name",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EvalErrorKind::UnboundName { name } => write!(f, "unbound name '{name}'"),
            EvalErrorKind::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            EvalErrorKind::ArityMismatch {
                callee,
                expected,
                got,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(
                    f,
                    "{callee} expects {expected} argument{plural}, got {got}"
                )
            }
            EvalErrorKind::DivisionByZero { op: BinaryOp::Mod } => f.write_str("modulo by zero"),
            EvalErrorKind::DivisionByZero { .. } => f.write_str("division by zero"),
            EvalErrorKind::TypeMismatch {
                context,
                expected,
                found,
            } => write!(f, "type mismatch in {context}: expected {expected}, found {found}"),
            EvalErrorKind::ReservedName { name } => {
                write!(f, "cannot bind '{name}': it names a builtin")
            }
        }
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn unbound_name(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UnboundName {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn arity_mismatch(callee: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch {
        callee: callee.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero { op })
}

#[cold]
pub fn type_mismatch(context: impl Into<String>, expected: &'static str, found: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        found,
    })
}

#[cold]
pub fn reserved_name(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::ReservedName {
        name: name.to_string(),
    })
}
