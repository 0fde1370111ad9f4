//! Scopes and environments for variable lookup.
//!
//! A [`Scope`] is a binding map with an optional parent. Scopes are shared
//! through [`LocalScope`] handles so that a closure and the code that
//! defined it see the same bindings.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use curly_ir::Name;
use rustc_hash::FxHashMap;

use crate::Value;

/// A single-threaded, reference-counted scope handle.
///
/// Wraps `Rc<RefCell<T>>`; all scope allocations go through
/// [`LocalScope::new`]. Not `Send`: the interpreter runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a new scope with a parent.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any previous binding here.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable, walking outward through parent scopes.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every binding in this scope.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// The scope chain an interpreter evaluates in.
///
/// `current` is the innermost scope: the global scope at top level, or the
/// call frame of the closure being executed.
pub struct Environment {
    current: LocalScope<Scope>,
    global: LocalScope<Scope>,
}

impl Environment {
    /// Create a new environment with an empty global scope.
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            current: global.clone(),
            global,
        }
    }

    /// Environment for a closure call: a fresh frame whose parent is the
    /// scope the closure captured.
    #[must_use]
    pub fn call_frame(&self, captured: &LocalScope<Scope>) -> Self {
        Environment {
            current: LocalScope::new(Scope::with_parent(captured.clone())),
            global: self.global.clone(),
        }
    }

    /// Bind a variable in the innermost scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current.borrow_mut().define(name, value);
    }

    /// Bind a variable in the global scope.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current.borrow().lookup(name)
    }

    /// Handle to the innermost scope, for closure capture.
    ///
    /// The handle is shared, not a snapshot: bindings added to the scope
    /// later are visible through it.
    pub fn capture(&self) -> LocalScope<Scope> {
        self.current.clone()
    }

    /// Whether evaluation is at top level.
    pub fn is_global(&self) -> bool {
        self.current.ptr_eq(&self.global)
    }

    /// Drop all global bindings.
    ///
    /// Closures stored in globals hold the global scope alive, so the
    /// owning interpreter clears it on drop to release them.
    pub fn clear_global(&mut self) {
        self.global.borrow_mut().clear();
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("globals", &self.global.borrow().len())
            .field("is_global", &self.is_global())
            .finish()
    }
}
