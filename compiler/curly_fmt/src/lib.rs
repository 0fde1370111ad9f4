//! Curly Formatter
//!
//! Renders a parsed program back to canonical surface syntax:
//! - one statement per line
//! - single spaces around binary operators and `=`
//! - `[a, b]`, `f(a, b)`, `lambda x, y { body }`
//! - parentheses only where precedence or left-associativity needs them
//!
//! Parsing the output yields a tree with the same shape as the input.
//! Comments are not part of the AST and are dropped.

use curly_ir::{
    format_number, ExprArena, ExprId, ExprKind, Program, StringInterner, UnaryOp,
};
use curly_stack::ensure_sufficient_stack;

/// Precedence of atoms: literals, names, lists, lambdas and calls.
const ATOM: u8 = 5;

/// Renders expressions from one arena into a string buffer.
pub struct Formatter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: String,
}

impl<'a> Formatter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Formatter {
            arena,
            interner,
            out: String::new(),
        }
    }

    /// Render every statement followed by a newline.
    pub fn format_program(mut self, program: &Program) -> String {
        for &stmt in &program.statements {
            self.emit_expr(stmt);
            self.out.push('\n');
        }
        self.out
    }

    /// Render a single expression.
    pub fn format_expr(mut self, id: ExprId) -> String {
        self.emit_expr(id);
        self.out
    }

    fn emit_expr(&mut self, id: ExprId) {
        ensure_sufficient_stack(|| self.emit_expr_inner(id));
    }

    fn emit_expr_inner(&mut self, id: ExprId) {
        let arena = self.arena;
        match arena.get_expr(id).kind {
            ExprKind::Number(bits) => self.out.push_str(&format_number(f64::from_bits(bits))),
            ExprKind::Ident(name) => self.out.push_str(self.interner.lookup(name)),
            ExprKind::Binary { op, left, right } => {
                let prec = op.precedence();
                self.emit_operand(left, prec);
                self.out.push(' ');
                self.out.push_str(op.as_symbol());
                self.out.push(' ');
                // Left-associative: an equal-precedence right operand needs parens.
                self.emit_operand(right, prec + 1);
            }
            ExprKind::Unary { op, operand } => {
                self.out.push_str(op.as_symbol());
                self.emit_operand(operand, UnaryOp::PRECEDENCE);
            }
            ExprKind::List(items) => {
                self.out.push('[');
                self.emit_comma_list(arena.get_expr_list(items));
                self.out.push(']');
            }
            ExprKind::Lambda { params, body } => {
                self.out.push_str("lambda ");
                for (i, &param) in arena.get_params(params).iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(self.interner.lookup(param));
                }
                self.out.push_str(" { ");
                self.emit_expr(body);
                self.out.push_str(" }");
            }
            ExprKind::Call { func, args } => {
                if matches!(arena.get_expr(func).kind, ExprKind::Lambda { .. }) {
                    self.out.push('(');
                    self.emit_expr(func);
                    self.out.push(')');
                } else {
                    self.emit_operand(func, ATOM);
                }
                self.out.push('(');
                self.emit_comma_list(arena.get_expr_list(args));
                self.out.push(')');
            }
            ExprKind::Assign { target, value } => {
                self.out.push_str(self.interner.lookup(target));
                self.out.push_str(" = ");
                self.emit_expr(value);
            }
        }
    }

    /// Emit `id`, parenthesized if it binds looser than `min_prec`.
    fn emit_operand(&mut self, id: ExprId, min_prec: u8) {
        if precedence(self.arena.get_expr(id).kind) < min_prec {
            self.out.push('(');
            self.emit_expr(id);
            self.out.push(')');
        } else {
            self.emit_expr(id);
        }
    }

    fn emit_comma_list(&mut self, ids: &[ExprId]) {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.emit_expr(id);
        }
    }
}

fn precedence(kind: ExprKind) -> u8 {
    match kind {
        ExprKind::Binary { op, .. } => op.precedence(),
        ExprKind::Unary { .. } => UnaryOp::PRECEDENCE,
        ExprKind::Assign { .. } => 0,
        _ => ATOM,
    }
}

/// Format a whole program.
pub fn format_program(program: &Program, arena: &ExprArena, interner: &StringInterner) -> String {
    Formatter::new(arena, interner).format_program(program)
}

/// Format one expression.
pub fn format_expr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    Formatter::new(arena, interner).format_expr(id)
}

#[cfg(test)]
mod tests;
