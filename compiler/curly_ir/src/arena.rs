//! Flat storage for expressions.

use crate::{Expr, ExprId, ExprRange, Name, ParamRange};

/// Owns every expression of a program.
///
/// Nodes reference children by `ExprId`; variable-length children (list
/// elements, call arguments, lambda parameters) are stored as ranges into
/// side buffers so `Expr` stays `Copy`.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    params: Vec<Name>,
}

/// Convert a buffer length to a `u32` index.
///
/// # Panics
/// Panics if a program holds more than `u32::MAX` nodes.
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} exceeded u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression and return its id.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression arena"));
        self.exprs.push(expr);
        id
    }

    /// Get an expression by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Store a sequence of expression ids contiguously.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list buffer");
        self.expr_lists.extend(ids);
        let end = to_u32(self.expr_lists.len(), "expression list buffer");
        ExprRange::new(start, end - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Store lambda parameter names contiguously.
    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_u32(self.params.len(), "parameter buffer");
        self.params.extend(names);
        let end = to_u32(self.params.len(), "parameter buffer");
        ParamRange::new(start, end - start)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }

    /// Number of expressions allocated.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
