//! Builtin functions: `map`, `filter`, `list`, `print`, `len`.

use super::Interpreter;
use crate::errors::{arity_mismatch, type_mismatch};
use crate::{Builtin, EvalError, EvalResult, Value};

impl Interpreter<'_> {
    pub(crate) fn eval_builtin(&mut self, builtin: Builtin, args: &[Value]) -> EvalResult {
        if args.len() != builtin.arity() {
            return Err(arity_mismatch(builtin.name(), builtin.arity(), args.len()));
        }

        match builtin {
            Builtin::Map => {
                let (func, items) = higher_order_args(builtin, args)?;
                let mapped = items
                    .iter()
                    .map(|item| self.eval_call(func, std::slice::from_ref(item)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(mapped))
            }
            Builtin::Filter => {
                let (func, items) = higher_order_args(builtin, args)?;
                let mut kept = Vec::new();
                for item in items {
                    if self.eval_call(func, std::slice::from_ref(item))?.is_truthy() {
                        kept.push(item.clone());
                    }
                }
                Ok(Value::list(kept))
            }
            // map and filter already produce lists
            Builtin::List => match &args[0] {
                list @ Value::List(_) => Ok(list.clone()),
                other => Err(type_mismatch("call to list", "list", other.type_name())),
            },
            Builtin::Print => {
                self.print_handler.println(&args[0].to_string());
                Ok(Value::Unit)
            }
            Builtin::Len => match args[0].as_list() {
                Some(items) => Ok(Value::Number(length_as_number(items.len()))),
                None => Err(type_mismatch("call to len", "list", args[0].type_name())),
            },
        }
    }
}

/// `(function, list)` arguments of `map` and `filter`.
fn higher_order_args(builtin: Builtin, args: &[Value]) -> Result<(&Value, &[Value]), EvalError> {
    let context = || format!("call to {}", builtin.name());
    let func = &args[0];
    if !func.is_callable() {
        return Err(type_mismatch(context(), "function", func.type_name()));
    }
    match args[1].as_list() {
        Some(items) => Ok((func, items)),
        None => Err(type_mismatch(context(), "list", args[1].type_name())),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "list lengths stay far below 2^52"
)]
fn length_as_number(len: usize) -> f64 {
    len as f64
}
