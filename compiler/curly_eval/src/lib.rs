//! Tree-walking interpreter for Curly.
//!
//! Evaluates a parsed [`Program`](curly_ir::Program) statement by statement
//! against a chain of scopes. Lambdas capture the scope they are defined in
//! by reference, so later assignments in that scope are visible to them.
//!
//! ```text
//! add = lambda x, y { x + y }
//! print(add(5, 3))            # 8
//! ```

mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{
    arity_mismatch, division_by_zero, not_callable, reserved_name,
    type_mismatch, unbound_name, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Builtin, Closure, Value};
