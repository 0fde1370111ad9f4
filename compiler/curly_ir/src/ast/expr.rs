//! Expression nodes.

use crate::{ExprId, ExprRange, Name, ParamRange, Span};

use super::{BinaryOp, UnaryOp};

/// Expression node.
///
/// Children are `ExprId` indices into an [`ExprArena`](crate::ExprArena).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Number literal, stored as `f64` bits: `42`, `2.5`
    Number(u64),

    /// Variable reference: `numbers`
    Ident(Name),

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Unary operation: `-operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// List literal: `[a, b, c]`
    List(ExprRange),

    /// Lambda literal: `lambda x, y { body }`
    Lambda { params: ParamRange, body: ExprId },

    /// Call: `func(args)`
    Call { func: ExprId, args: ExprRange },

    /// Assignment statement: `target = value`
    Assign { target: Name, value: ExprId },
}

impl ExprKind {
    /// Number literal from an `f64`.
    #[inline]
    pub fn number(value: f64) -> Self {
        ExprKind::Number(value.to_bits())
    }

    /// Value of a number literal.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ExprKind::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Short name of the node kind, used in trace output.
    pub fn label(&self) -> &'static str {
        match self {
            ExprKind::Number(_) => "number",
            ExprKind::Ident(_) => "identifier",
            ExprKind::Binary { .. } => "binary",
            ExprKind::Unary { .. } => "unary",
            ExprKind::List(_) => "list",
            ExprKind::Lambda { .. } => "lambda",
            ExprKind::Call { .. } => "call",
            ExprKind::Assign { .. } => "assignment",
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Expr, ExprKind};
    crate::static_assert_size!(ExprKind, 16);
    crate::static_assert_size!(Expr, 24);
}
