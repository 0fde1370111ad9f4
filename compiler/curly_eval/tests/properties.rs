//! Property tests for `map` and `filter`.

use curly_eval::{silent_handler, InterpreterBuilder, Value};
use curly_ir::StringInterner;
use proptest::prelude::*;

fn eval(source: &str) -> Result<Value, String> {
    let interner = StringInterner::new();
    let lexed = curly_lexer::lex(source, &interner);
    if lexed.has_errors() {
        return Err(format!("lex errors: {:?}", lexed.errors));
    }
    let parsed = curly_parse::parse(&lexed.tokens, &interner);
    if parsed.has_errors() {
        return Err(format!("parse errors: {:?}", parsed.errors));
    }
    let mut interpreter = InterpreterBuilder::new(&interner, &parsed.arena)
        .print_handler(silent_handler())
        .build();
    interpreter
        .eval_program(&parsed.program)
        .map_err(|e| e.to_string())
}

fn list_literal(items: &[i32]) -> String {
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn numbers(value: &Value) -> Vec<f64> {
    value
        .as_list()
        .unwrap_or_else(|| panic!("expected a list, got {value:?}"))
        .iter()
        .map(|v| v.as_number().unwrap_or_else(|| panic!("expected a number, got {v:?}")))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn map_preserves_length(items in prop::collection::vec(-1000i32..1000, 0..20), k in -5i32..5) {
        let source = format!(
            "l = {}\nlen(map(lambda x {{ x * {k} + 1 }}, l)) == len(l)",
            list_literal(&items)
        );
        prop_assert_eq!(eval(&source), Ok(Value::Bool(true)));
    }

    #[test]
    fn map_applies_in_order(items in prop::collection::vec(-1000i32..1000, 0..20)) {
        let source = format!("map(lambda x {{ x * x }}, {})", list_literal(&items));
        let mapped = numbers(&eval(&source).map_err(TestCaseError::fail)?);
        let expected: Vec<f64> = items.iter().map(|&n| f64::from(n) * f64::from(n)).collect();
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn filter_is_ordered_subsequence(items in prop::collection::vec(-1000i32..1000, 0..20), m in 1i32..5) {
        let source = format!(
            "list(filter(lambda x {{ x % {m} == 0 }}, {}))",
            list_literal(&items)
        );
        let kept = numbers(&eval(&source).map_err(TestCaseError::fail)?);

        // Every kept element satisfies the predicate...
        for n in &kept {
            prop_assert!(n % f64::from(m) == 0.0, "{} kept but not divisible by {}", n, m);
        }
        // ...and they appear in the input in the same relative order.
        let mut rest = items.iter().map(|&n| f64::from(n));
        for n in &kept {
            prop_assert!(rest.any(|x| x == *n), "{} out of order in {:?}", n, items);
        }
        let expected = items.iter().filter(|&&n| n % m == 0).count();
        prop_assert_eq!(kept.len(), expected);
    }
}
