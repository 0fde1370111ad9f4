//! Curly IR - shared representation types.
//!
//! This crate contains the data structures every phase agrees on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - A flat expression arena and the AST node kinds stored in it
//! - Number rendering shared by the formatter and `print`
//!
//! # Design
//!
//! - **Intern identifiers**: strings become `Name(u32)`, compared in O(1).
//! - **Flatten the tree**: no `Box<Expr>`, children are `ExprId(u32)` indices.
//!
//! Floats are stored as `u64` bits inside tokens and nodes so those types
//! keep `Eq` and `Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod number;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, Program, UnaryOp};
pub use expr_id::{ExprId, ExprRange, ParamRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use number::format_number;
pub use span::{Span, SpanError};
pub use token::{Token, TokenCategory, TokenFlags, TokenKind, TokenList};
