//! Binary and unary operator implementations.
//!
//! The value set is closed, so operators dispatch with a direct match on
//! the operand pair.

use curly_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, type_mismatch};
use crate::{EvalError, EvalResult, Value};

/// Apply a binary operator to two evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        _ => {
            if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
                return eval_number_binary(a, b, op);
            }
            match (left.as_list(), right.as_list()) {
                (Some(a), Some(b)) if op == BinaryOp::Add => {
                    Ok(Value::list(a.iter().chain(b).cloned().collect()))
                }
                _ => Err(binary_type_mismatch(&left, &right, op)),
            }
        }
    }
}

fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Number(a + b)),
        BinaryOp::Sub => Ok(Value::Number(a - b)),
        BinaryOp::Mul => Ok(Value::Number(a * b)),
        BinaryOp::Div | BinaryOp::Mod if b == 0.0 => Err(division_by_zero(op)),
        BinaryOp::Div => Ok(Value::Number(a / b)),
        BinaryOp::Mod => Ok(Value::Number(floored_mod(a, b))),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
    }
}

/// Remainder whose sign follows the divisor: `-7 % 2 == 1`, `7 % -2 == -1`.
fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Report the operand that is not a number.
#[cold]
fn binary_type_mismatch(left: &Value, right: &Value, op: BinaryOp) -> EvalError {
    let found = if left.as_number().is_some() {
        right.type_name()
    } else {
        left.type_name()
    };
    type_mismatch(format!("operator '{}'", op.as_symbol()), "number", found)
}

/// Apply a unary operator to an evaluated operand.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value.as_number(), op) {
        (Some(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (None, _) => Err(type_mismatch(
            format!("operator '{}'", op.as_symbol()),
            "number",
            value.type_name(),
        )),
    }
}
