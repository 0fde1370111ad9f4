use curly_ir::Span;

use super::*;
use crate::ErrorCode;

fn render(source: &str, diag: &Diagnostic) -> String {
    let emitter = Emitter::new("sample.curly", source, false);
    let mut out = Vec::new();
    emitter.emit(diag, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_emit_contains_code_message_and_label() {
    let source = "x = 1 / 0\n";
    let diag = Diagnostic::error(ErrorCode::E6004)
        .with_message("division by zero")
        .with_label(Span::new(4, 9), "divisor is zero");

    let text = render(source, &diag);
    assert!(text.contains("E6004"), "{text}");
    assert!(text.contains("division by zero"), "{text}");
    assert!(text.contains("divisor is zero"), "{text}");
    assert!(text.contains("sample.curly"), "{text}");
    assert!(!text.contains('\u{1b}'), "colors disabled: {text}");
}

#[test]
fn test_emit_handles_multibyte_source() {
    let source = "x = \u{20ac}\n";
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("unexpected character '\u{20ac}'")
        .with_label(Span::new(4, 7), "not part of any token")
        .with_note("identifiers use ASCII letters, digits and '_'");

    let text = render(source, &diag);
    assert!(text.contains("not part of any token"), "{text}");
    assert!(text.contains("identifiers use ASCII"), "{text}");
}

#[test]
fn test_summary_has_line_and_column() {
    let source = "y = 2\nprint(z)\n";
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("unbound name 'z'")
        .with_label(Span::new(12, 13), "not defined");
    let emitter = Emitter::new("sample.curly", source, false);
    assert_eq!(
        emitter.summary(&diag),
        "sample.curly:2:7: error[E6001]: unbound name 'z'"
    );
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
