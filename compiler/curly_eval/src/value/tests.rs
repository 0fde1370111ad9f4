use pretty_assertions::assert_eq;

use super::*;

fn numbers(ns: &[f64]) -> Value {
    Value::list(ns.iter().copied().map(Value::Number).collect())
}

#[test]
fn test_display_numbers() {
    assert_eq!(Value::Number(8.0).to_string(), "8");
    assert_eq!(Value::Number(-3.0).to_string(), "-3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(0.1).to_string(), "0.1");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
}

#[test]
fn test_display_lists() {
    assert_eq!(numbers(&[1.0, 4.0, 9.0, 16.0]).to_string(), "[1, 4, 9, 16]");
    assert_eq!(Value::list(vec![]).to_string(), "[]");
    let nested = Value::list(vec![numbers(&[1.0]), numbers(&[]), Value::Bool(true)]);
    assert_eq!(nested.to_string(), "[[1], [], True]");
}

#[test]
fn test_display_other() {
    assert_eq!(Value::Bool(false).to_string(), "False");
    assert_eq!(Value::Unit.to_string(), "None");
    assert_eq!(Value::Builtin(Builtin::Map).to_string(), "<builtin map>");
}

#[test]
fn test_truthiness() {
    assert!(Value::Number(2.0).is_truthy());
    assert!(!Value::Number(0.0).is_truthy());
    assert!(!Value::Number(-0.0).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(numbers(&[0.0]).is_truthy());
    assert!(!numbers(&[]).is_truthy());
    assert!(Value::Builtin(Builtin::Print).is_truthy());
    assert!(!Value::Unit.is_truthy());
}

#[test]
fn test_equality() {
    assert_eq!(numbers(&[1.0, 2.0]), numbers(&[1.0, 2.0]));
    assert_ne!(numbers(&[1.0, 2.0]), numbers(&[2.0, 1.0]));
    assert_ne!(Value::Number(1.0), Value::Bool(true));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_eq!(Value::Number(0.0), Value::Number(-0.0));
    assert_ne!(Value::Builtin(Builtin::Map), Value::Builtin(Builtin::Filter));
}

#[test]
fn test_closure_identity() {
    let make = || {
        Value::Closure(Rc::new(Closure {
            params: vec![Name::from_raw(1)],
            body: ExprId::new(0),
            env: LocalScope::new(Scope::new()),
        }))
    };
    let a = make();
    let b = make();
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert_eq!(a.to_string(), "<lambda/1>");
    assert_eq!(a.type_name(), "lambda");
}

#[test]
fn test_builtin_names() {
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
    }
    assert_eq!(Builtin::from_name("reduce"), None);
    assert_eq!(Builtin::Map.arity(), 2);
    assert_eq!(Builtin::Print.arity(), 1);
}
