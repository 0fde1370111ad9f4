//! Function call evaluation methods for the Interpreter.

use std::sync::Arc;

use super::{Interpreter, ScopeOwnership};
use crate::errors::{arity_mismatch, not_callable};
use crate::{Closure, Environment, EvalResult, Value};

impl<'a> Interpreter<'a> {
    /// Apply an evaluated callee to evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %func, args = args.len()))]
    pub(crate) fn eval_call(&mut self, func: &Value, args: &[Value]) -> EvalResult {
        match func {
            Value::Closure(closure) => {
                let call_env = self.prepare_call_env(closure, args)?;
                let mut call_interpreter = self.create_function_interpreter(call_env);
                call_interpreter.eval(closure.body)
            }
            Value::Builtin(builtin) => self.eval_builtin(*builtin, args),
            _ => Err(not_callable(func.type_name())),
        }
    }

    /// Arity check plus a fresh frame binding parameters to arguments.
    fn prepare_call_env(&self, closure: &Closure, args: &[Value]) -> Result<Environment, crate::EvalError> {
        if args.len() != closure.arity() {
            return Err(arity_mismatch("lambda", closure.arity(), args.len()));
        }

        let mut call_env = self.env.call_frame(&closure.env);
        for (&param, arg) in closure.params.iter().zip(args) {
            call_env.define(param, arg.clone());
        }
        Ok(call_env)
    }

    /// Interpreter for a closure body: same arena, interner and output,
    /// with its own innermost scope.
    fn create_function_interpreter(&self, call_env: Environment) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: call_env,
            print_handler: Arc::clone(&self.print_handler),
            scope_ownership: ScopeOwnership::Borrowed,
        }
    }
}
