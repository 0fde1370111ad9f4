use pretty_assertions::assert_eq;

use curly_ir::{BinaryOp, Span, StringInterner};

use crate::{buffer_handler, Environment, EvalError, EvalErrorKind, InterpreterBuilder, Value};

/// Run `source`, returning the result and everything printed before it ended.
fn run(source: &str) -> (Result<Value, EvalError>, String) {
    let interner = StringInterner::new();
    let lexed = curly_lexer::lex(source, &interner);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let parsed = curly_parse::parse(&lexed.tokens, &interner);
    assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);

    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
        .print_handler(buffer_handler())
        .build();
    let result = interpreter.eval_program(&parsed.program);
    (result, interpreter.get_print_output())
}

fn output(source: &str) -> String {
    let (result, out) = run(source);
    assert!(result.is_ok(), "eval error: {result:?}");
    out
}

fn value(source: &str) -> Value {
    let (result, _) = run(source);
    result.unwrap_or_else(|e| panic!("eval error: {e}"))
}

fn error(source: &str) -> EvalError {
    match run(source).0 {
        Ok(v) => panic!("expected an error, got {v:?}"),
        Err(e) => e,
    }
}

#[test]
fn test_sample_program() {
    let source = "# lambda functions
add = lambda x, y { x + y }
print(add(5, 3))

numbers = [1, 2, 3, 4]
squared_numbers = list(map(lambda x  {x * x}, numbers))
print(squared_numbers)

even_numbers = list(filter(lambda x { x % 2 == 0 }, numbers))
print(even_numbers)
";
    assert_eq!(output(source), "8\n[1, 4, 9, 16]\n[2, 4]\n");
}

#[test]
fn test_sample_scenarios_with_semicolons() {
    assert_eq!(output("add = lambda x, y { x + y }; print(add(5, 3))"), "8\n");
    assert_eq!(
        output("numbers = [1, 2, 3, 4]; squared_numbers = list(map(lambda x {x * x}, numbers)); print(squared_numbers)"),
        "[1, 4, 9, 16]\n"
    );
    assert_eq!(
        output("numbers = [1, 2, 3, 4]; even_numbers = list(filter(lambda x { x % 2 == 0 }, numbers)); print(even_numbers)"),
        "[2, 4]\n"
    );
}

#[test]
fn test_closure_captures_by_reference() {
    assert_eq!(value("y = 1; f = lambda x { x + y }; y = 2; f(0)"), Value::Number(2.0));
}

#[test]
fn test_closure_captures_call_frame() {
    let source = "
make_adder = lambda n { lambda x { x + n } }
add3 = make_adder(3)
add10 = make_adder(10)
print(add3(1))
print(add10(1))
print(map(make_adder(100), [1, 2]))
";
    assert_eq!(output(source), "4\n11\n[101, 102]\n");
}

#[test]
fn test_parameters_shadow_globals() {
    assert_eq!(value("x = 10; f = lambda x { x * 2 }; f(3) + x"), Value::Number(16.0));
}

#[test]
fn test_higher_order_lambdas() {
    let source = "
count = lambda xs { len(xs) }
twice = lambda f, x { f(f(x)) }
twice(lambda x { x * x }, 3) + count([1, 2, 3])
";
    assert_eq!(value(source), Value::Number(84.0));
}

#[test]
fn test_immediately_applied_lambda() {
    assert_eq!(value("(lambda a, b { a - b })(10, 4)"), Value::Number(6.0));
}

#[test]
fn test_arithmetic_and_precedence() {
    assert_eq!(value("1 + 2 * 3"), Value::Number(7.0));
    assert_eq!(value("(1 + 2) * 3"), Value::Number(9.0));
    assert_eq!(value("10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(value("-2 * 3"), Value::Number(-6.0));
    assert_eq!(value("7 / 2"), Value::Number(3.5));
    assert_eq!(value("7 % 3"), Value::Number(1.0));
    assert_eq!(value("1 + 1 == 2"), Value::Bool(true));
}

#[test]
fn test_print_rendering() {
    assert_eq!(
        output("print(2.5); print(6 / 3); print([]); print(1 < 2); print([[1], [2, 3]])"),
        "2.5\n2\n[]\nTrue\n[[1], [2, 3]]\n"
    );
}

#[test]
fn test_print_returns_unit() {
    assert_eq!(output("print(print(1))"), "1\nNone\n");
    assert_eq!(value("print(0)"), Value::Unit);
}

#[test]
fn test_modulo_with_negative_operands() {
    assert_eq!(output("print(-7 % 2); print(7 % -2)"), "1\n-1\n");
    assert_eq!(
        output("print(filter(lambda x { x % 2 == 1 }, [-3, -2, -1, 0, 1, 3]))"),
        "[-3, -1, 1, 3]\n"
    );
}

#[test]
fn test_print_large_and_tiny_numbers_in_exponent_form() {
    assert_eq!(
        output("print(1e300 * 10); print(0 - 2.5e20); print(1 / 1e7)"),
        "1e+301\n-2.5e+20\n1e-07\n"
    );
}

#[test]
fn test_filter_truthiness() {
    assert_eq!(output("print(filter(lambda x { x }, [0, 1, 2, 0]))"), "[1, 2]\n");
    assert_eq!(output("print(filter(lambda x { x > 1 }, [3, 1, 2]))"), "[3, 2]\n");
    assert_eq!(output("print(filter(lambda x { [] }, [1]))"), "[]\n");
}

#[test]
fn test_map_with_builtin_callable() {
    assert_eq!(output("print(map(len, [[1], [], [1, 2]]))"), "[1, 0, 2]\n");
}

#[test]
fn test_list_concatenation() {
    assert_eq!(output("print([1] + [2, 3])"), "[1, 2, 3]\n");
}

#[test]
fn test_assignment_returns_value() {
    assert_eq!(value("x = 5"), Value::Number(5.0));
    assert_eq!(value(""), Value::Unit);
}

#[test]
fn test_error_division_by_zero() {
    let err = error("1 / 0");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero { op: BinaryOp::Div });
    assert_eq!(err.span, Some(Span::new(0, 5)));

    let err = error("5 % (1 - 1)");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero { op: BinaryOp::Mod });
}

#[test]
fn test_error_unbound_name() {
    let err = error("print(1)\nundefined_name");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundName {
            name: "undefined_name".to_string()
        }
    );
    assert_eq!(err.span, Some(Span::new(9, 23)));
}

#[test]
fn test_error_unbound_inside_lambda_body() {
    let err = error("f = lambda x { x + z }\nf(1)");
    assert_eq!(err.kind, EvalErrorKind::UnboundName { name: "z".to_string() });
    assert_eq!(err.span, Some(Span::new(19, 20)));
}

#[test]
fn test_error_arity_mismatch() {
    let err = error("add = lambda x, y { x + y }\nadd(1)");
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            callee: "lambda".to_string(),
            expected: 2,
            got: 1
        }
    );
    assert_eq!(err.span, Some(Span::new(28, 34)));

    let err = error("print(1, 2)");
    assert_eq!(err.to_string(), "print expects 1 argument, got 2");
    let err = error("map(lambda x { x })");
    assert_eq!(err.to_string(), "map expects 2 arguments, got 1");
}

#[test]
fn test_error_not_callable() {
    let err = error("x = 3; x(1)");
    assert_eq!(err.kind, EvalErrorKind::NotCallable { type_name: "number" });
    let err = error("[1, 2](0)");
    assert_eq!(err.to_string(), "list is not callable");
}

#[test]
fn test_error_type_mismatch() {
    assert_eq!(
        error("[1] * 2").to_string(),
        "type mismatch in operator '*': expected number, found list"
    );
    assert_eq!(
        error("map(1, [1])").to_string(),
        "type mismatch in call to map: expected function, found number"
    );
    assert_eq!(
        error("filter(lambda x { x }, 5)").to_string(),
        "type mismatch in call to filter: expected list, found number"
    );
    assert_eq!(
        error("list(3)").to_string(),
        "type mismatch in call to list: expected list, found number"
    );
    assert_eq!(
        error("-[1]").to_string(),
        "type mismatch in operator '-': expected number, found list"
    );
}

#[test]
fn test_error_reserved_name() {
    let err = error("print = 1");
    assert_eq!(err.kind, EvalErrorKind::ReservedName { name: "print".to_string() });
    let err = error("f = lambda map { map }");
    assert_eq!(err.kind, EvalErrorKind::ReservedName { name: "map".to_string() });
}

#[test]
fn test_error_inside_map_callback() {
    let err = error("map(lambda x { 1 / x }, [1, 0])");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero { op: BinaryOp::Div });
    assert_eq!(err.span, Some(Span::new(15, 20)));
}

#[test]
fn test_output_before_error_is_kept() {
    let (result, out) = run("print(1)\nprint(2 / 0)\nprint(3)");
    assert!(result.is_err());
    assert_eq!(out, "1\n");
}

#[test]
fn test_deep_recursion_does_not_overflow() {
    let depth = 2000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(value(&source), Value::Number(1.0));
}

#[test]
fn test_custom_environment() {
    let interner = StringInterner::new();
    let lexed = curly_lexer::lex("print(answer * 2)", &interner);
    let parsed = curly_parse::parse(&lexed.tokens, &interner);

    let mut env = Environment::new();
    env.define_global(interner.intern("answer"), Value::Number(21.0));
    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
        .env(env)
        .print_handler(buffer_handler())
        .build();
    assert!(interpreter.eval_program(&parsed.program).is_ok());
    assert_eq!(interpreter.get_print_output(), "42\n");
    assert_eq!(interpreter.lookup("answer"), Some(Value::Number(21.0)));
    assert!(interpreter.env().is_global());
}

#[test]
fn test_drop_releases_closures() {
    let interner = StringInterner::new();
    let lexed = curly_lexer::lex("f = lambda x { f }", &interner);
    let parsed = curly_parse::parse(&lexed.tokens, &interner);

    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
        .print_handler(buffer_handler())
        .build();
    let Ok(Value::Closure(closure)) = interpreter.eval_program(&parsed.program) else {
        panic!("expected a closure");
    };
    let global = interpreter.env().capture();
    drop(interpreter);

    assert!(global.borrow().is_empty());
    // Only our handle is left once the global binding is gone.
    assert_eq!(std::rc::Rc::strong_count(&closure), 1);
}
