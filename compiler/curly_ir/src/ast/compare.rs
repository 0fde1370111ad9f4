//! Structural comparison of expressions across arenas.

use crate::{ExprArena, ExprId, ExprRange};

use super::ExprKind;

/// Check that two expressions have the same shape, ignoring spans.
///
/// The expressions may live in different arenas but their names must come
/// from the same interner. Used to verify that formatting a program and
/// parsing it again reproduces the original tree.
pub fn same_shape(a_arena: &ExprArena, a: ExprId, b_arena: &ExprArena, b: ExprId) -> bool {
    let lists_match = |x: ExprRange, y: ExprRange| {
        let xs = a_arena.get_expr_list(x);
        let ys = b_arena.get_expr_list(y);
        xs.len() == ys.len()
            && xs
                .iter()
                .zip(ys)
                .all(|(&l, &r)| same_shape(a_arena, l, b_arena, r))
    };

    match (a_arena.get_expr(a).kind, b_arena.get_expr(b).kind) {
        (ExprKind::Number(x), ExprKind::Number(y)) => x == y,
        (ExprKind::Ident(x), ExprKind::Ident(y)) => x == y,
        (
            ExprKind::Binary {
                op: op_a,
                left: left_a,
                right: right_a,
            },
            ExprKind::Binary {
                op: op_b,
                left: left_b,
                right: right_b,
            },
        ) => {
            op_a == op_b
                && same_shape(a_arena, left_a, b_arena, left_b)
                && same_shape(a_arena, right_a, b_arena, right_b)
        }
        (
            ExprKind::Unary {
                op: op_a,
                operand: operand_a,
            },
            ExprKind::Unary {
                op: op_b,
                operand: operand_b,
            },
        ) => op_a == op_b && same_shape(a_arena, operand_a, b_arena, operand_b),
        (ExprKind::List(x), ExprKind::List(y)) => lists_match(x, y),
        (
            ExprKind::Lambda {
                params: params_a,
                body: body_a,
            },
            ExprKind::Lambda {
                params: params_b,
                body: body_b,
            },
        ) => {
            a_arena.get_params(params_a) == b_arena.get_params(params_b)
                && same_shape(a_arena, body_a, b_arena, body_b)
        }
        (
            ExprKind::Call {
                func: func_a,
                args: args_a,
            },
            ExprKind::Call {
                func: func_b,
                args: args_b,
            },
        ) => same_shape(a_arena, func_a, b_arena, func_b) && lists_match(args_a, args_b),
        (
            ExprKind::Assign {
                target: target_a,
                value: value_a,
            },
            ExprKind::Assign {
                target: target_b,
                value: value_b,
            },
        ) => target_a == target_b && same_shape(a_arena, value_a, b_arena, value_b),
        _ => false,
    }
}
