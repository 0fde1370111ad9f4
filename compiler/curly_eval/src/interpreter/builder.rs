//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use curly_ir::{ExprArena, StringInterner};

use super::{Interpreter, ScopeOwnership};
use crate::{stdout_handler, Builtin, Environment, SharedPrintHandler, Value};

/// Builder for creating Interpreter instances.
///
/// Builtins are bound in the global scope when the interpreter is built,
/// whether or not an environment was supplied.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            print_handler: None,
        }
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` writes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let mut env = self.env.unwrap_or_default();
        for builtin in Builtin::ALL {
            env.define_global(self.interner.intern(builtin.name()), Value::Builtin(builtin));
        }

        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            scope_ownership: ScopeOwnership::Owned,
        }
    }
}
