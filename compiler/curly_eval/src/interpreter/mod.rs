//! Tree-walking interpreter over the flat expression arena.

mod builder;
mod builtins;
mod function_call;

use std::rc::Rc;

use curly_ir::{ExprArena, ExprId, ExprKind, Name, Program, StringInterner};
use curly_stack::ensure_sufficient_stack;

pub use builder::InterpreterBuilder;

use crate::errors::{reserved_name, unbound_name};
use crate::{
    evaluate_binary, evaluate_unary, Builtin, Closure, Environment, EvalResult,
    SharedPrintHandler, Value,
};

/// Whether an interpreter owns its global scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScopeOwnership {
    /// Top-level interpreter. Clears the global scope on drop, releasing
    /// closures that the global scope and the closures keep alive for each
    /// other.
    Owned,
    /// Closure-call interpreter sharing its parent's globals.
    Borrowed,
}

/// Tree-walking interpreter for Curly programs.
///
/// Statements run in order; `print` output goes to the configured
/// [`SharedPrintHandler`]. The first error aborts the program, but output
/// already printed stays printed.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: &'a ExprArena,
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) scope_ownership: ScopeOwnership,
}

impl Drop for Interpreter<'_> {
    fn drop(&mut self) {
        if self.scope_ownership == ScopeOwnership::Owned {
            self.env.clear_global();
        }
    }
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default settings: stdout printing, fresh globals.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Run every statement in order. Returns the value of the last one,
    /// or `Unit` for an empty program.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn eval_program(&mut self, program: &Program) -> EvalResult {
        let mut last = Value::Unit;
        for &stmt in &program.statements {
            last = self.eval(stmt)?;
        }
        Ok(last)
    }

    /// Evaluate one expression in the current environment.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        let span = self.arena.get_expr(id).span;
        ensure_sufficient_stack(|| self.eval_inner(id)).map_err(|e| e.with_span(span))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        tracing::trace!(kind = expr.kind.label(), span = %expr.span, "eval");

        match expr.kind {
            ExprKind::Number(bits) => Ok(Value::Number(f64::from_bits(bits))),
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| unbound_name(self.interner.lookup(name))),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(left, right, op)
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(value, op)
            }
            ExprKind::List(range) => {
                let items = arena
                    .get_expr_list(range)
                    .iter()
                    .map(|&item| self.eval(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::list(items))
            }
            ExprKind::Lambda { params, body } => {
                let params = arena.get_params(params);
                for &param in params {
                    self.check_bindable(param)?;
                }
                Ok(Value::Closure(Rc::new(Closure {
                    params: params.to_vec(),
                    body,
                    env: self.env.capture(),
                })))
            }
            ExprKind::Call { func, args } => {
                let func = self.eval(func)?;
                let args = arena
                    .get_expr_list(args)
                    .iter()
                    .map(|&arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.eval_call(&func, &args)
            }
            ExprKind::Assign { target, value } => {
                self.check_bindable(target)?;
                let value = self.eval(value)?;
                self.env.define(target, value.clone());
                Ok(value)
            }
        }
    }

    /// Builtin names can't be rebound, as variables or as parameters.
    fn check_bindable(&self, name: Name) -> Result<(), crate::EvalError> {
        let text = self.interner.lookup(name);
        match Builtin::from_name(text) {
            Some(_) => Err(reserved_name(text)),
            None => Ok(()),
        }
    }

    /// Output captured by a buffer print handler.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Current value of a variable, if bound.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.env.lookup(self.interner.intern(name))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }
}

#[cfg(test)]
mod tests;
