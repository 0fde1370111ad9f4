//! Binary operator chains and unary minus.
//!
//! Each level loops over its operators, so all binary operators are
//! left-associative: `a - b - c` is `(a - b) - c`.

use curly_ir::{BinaryOp, Expr, ExprId, ExprKind, TokenKind, UnaryOp};
use curly_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    #[inline]
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_comparison())
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_binary_op(1) {
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_binary_op(2) {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_binary_op(3) {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Operator(BinaryOp::Sub)) {
            let start = self.cursor.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(self.span_of(operand));
            return Ok(self.arena.alloc_expr(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand,
                },
                span,
            )));
        }
        self.parse_postfix()
    }

    /// Operator at the current token if it belongs to `precedence`.
    ///
    /// An operator that starts a new top-level line begins a new statement
    /// instead of continuing this one.
    fn match_binary_op(&self, precedence: u8) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Operator(op) if op.precedence() == precedence && !self.at_line_break() => {
                Some(op)
            }
            _ => None,
        }
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }
}
