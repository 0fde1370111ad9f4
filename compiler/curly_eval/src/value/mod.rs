//! Runtime values.

use std::fmt;
use std::rc::Rc;

use curly_ir::{format_number, ExprId, Name};

use crate::{LocalScope, Scope};

/// A runtime value.
///
/// Lists and closures are reference-counted, so cloning a `Value` is cheap.
#[derive(Clone)]
pub enum Value {
    Number(f64),
    /// Result of a comparison operator.
    Bool(bool),
    List(Rc<[Value]>),
    Closure(Rc<Closure>),
    Builtin(Builtin),
    /// Result of `print`.
    Unit,
}

impl Value {
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items.into())
    }

    /// Name of the value's kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Closure(_) => "lambda",
            Value::Builtin(_) => "builtin function",
            Value::Unit => "unit",
        }
    }

    /// Truthiness as used by `filter`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::Bool(b) => *b,
            Value::List(items) => !items.is_empty(),
            Value::Closure(_) | Value::Builtin(_) => true,
            Value::Unit => false,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Builtin(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Structural equality as seen by `==`.
///
/// Numbers compare numerically (so `NaN != NaN`), lists element-wise,
/// closures by identity. Values of different kinds are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Closure(closure) => write!(f, "<lambda/{}>", closure.arity()),
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name()),
            Value::Unit => f.write_str("None"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::List(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Closure(closure) => fmt::Debug::fmt(closure, f),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name()),
            Value::Unit => f.write_str("Unit"),
        }
    }
}

/// A lambda value: parameters, body, and the scope it was defined in.
pub struct Closure {
    pub params: Vec<Name>,
    pub body: ExprId,
    pub env: LocalScope<Scope>,
}

impl Closure {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// The captured scope usually contains this closure, so it is left out.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Functions provided by the interpreter, bound as globals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Map,
    Filter,
    List,
    Print,
    Len,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Map,
        Builtin::Filter,
        Builtin::List,
        Builtin::Print,
        Builtin::Len,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Map => "map",
            Builtin::Filter => "filter",
            Builtin::List => "list",
            Builtin::Print => "print",
            Builtin::Len => "len",
        }
    }

    /// The builtin bound to `name`, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Number of arguments the builtin takes.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Map | Builtin::Filter => 2,
            Builtin::List | Builtin::Print | Builtin::Len => 1,
        }
    }
}

#[cfg(test)]
mod tests;
