use curly_ir::StringInterner;
use pretty_assertions::assert_eq;

use super::{format_expr, format_program};

fn format_source(source: &str) -> String {
    let interner = StringInterner::new();
    let lexed = curly_lexer::lex(source, &interner);
    assert!(lexed.errors.is_empty(), "{:?}", lexed.errors);
    let parsed = curly_parse::parse(&lexed.tokens, &interner);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    format_program(&parsed.program, &parsed.arena, &interner)
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
    assert_eq!(
        format_source(source),
        "add = lambda x, y { x + y }
print(add(5, 3))
numbers = [1, 2, 3, 4]
squared_numbers = list(map(lambda x { x * x }, numbers))
print(squared_numbers)
even_numbers = list(filter(lambda x { x % 2 == 0 }, numbers))
print(even_numbers)
"
    );
}

#[test]
fn test_redundant_parentheses_are_dropped() {
    assert_eq!(format_source("1 + (2 * 3)"), "1 + 2 * 3\n");
    assert_eq!(format_source("(10 - 4) - 3"), "10 - 4 - 3\n");
    assert_eq!(format_source("((x))"), "x\n");
    assert_eq!(format_source("f((a + b))"), "f(a + b)\n");
}

#[test]
fn test_required_parentheses_are_kept() {
    assert_eq!(format_source("(1 + 2) * 3"), "(1 + 2) * 3\n");
    assert_eq!(format_source("10 - (4 - 3)"), "10 - (4 - 3)\n");
    assert_eq!(format_source("a == (b < c)"), "a == (b < c)\n");
    assert_eq!(format_source("-(x + 1)"), "-(x + 1)\n");
    assert_eq!(format_source("(lambda x { x })(1)"), "(lambda x { x })(1)\n");
}

#[test]
fn test_numbers_use_print_rendering() {
    assert_eq!(format_source("x = 2.0"), "x = 2\n");
    assert_eq!(format_source("x = 1.50"), "x = 1.5\n");
    assert_eq!(format_source("x = 1e3"), "x = 1000\n");
}

#[test]
fn test_spacing_is_normalized() {
    assert_eq!(
        format_source("x=1;y=[ 1,2 ,3, ];f=lambda a,b{a*b}"),
        "x = 1\ny = [1, 2, 3]\nf = lambda a, b { a * b }\n"
    );
    assert_eq!(format_source("- - x"), "--x\n");
}

#[test]
fn test_format_single_expression() {
    let interner = StringInterner::new();
    let lexed = curly_lexer::lex("map(lambda x { x * 2 }, [1, 2])", &interner);
    let parsed = curly_parse::parse(&lexed.tokens, &interner);
    let id = parsed.program.statements[0];
    assert_eq!(
        format_expr(&parsed.arena, &interner, id),
        "map(lambda x { x * 2 }, [1, 2])"
    );
}
