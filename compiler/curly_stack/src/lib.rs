//! Stack growth for recursive parsing and evaluation.
//!
//! Curly's parser and evaluator recurse once per nesting level, so
//! `[[[[...]]]]` or a long chain of nested calls can exhaust the native
//! stack. Wrapping each recursive step in [`ensure_sufficient_stack`] grows
//! the stack on demand instead of overflowing.
//!
//! On `wasm32` the wrapper is a plain call.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
///
/// ```text
/// fn eval(&mut self, id: ExprId) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
