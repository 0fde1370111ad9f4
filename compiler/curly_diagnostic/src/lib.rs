//! Diagnostics shared by every phase.
//!
//! Each phase keeps its own error type and converts it into a
//! [`Diagnostic`] for reporting:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary span with a label saying where
//! - notes with extra context
//!
//! [`emitter`] renders diagnostics against the source text.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
