//! AST node types.
//!
//! Nodes live in an [`ExprArena`](crate::ExprArena) and refer to each other
//! through `ExprId`. A [`Program`] is the ordered list of top-level statements.

mod compare;
mod expr;
mod operators;

pub use compare::same_shape;
pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};

use crate::ExprId;

/// A parsed program: top-level statements in source order.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<ExprId>,
}

impl Program {
    pub fn new(statements: Vec<ExprId>) -> Self {
        Program { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
