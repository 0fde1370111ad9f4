use curly_ir::{BinaryOp, Span, StringInterner, TokenCategory, TokenKind};
use pretty_assertions::assert_eq;

use curly_diagnostic::ErrorCode;

use super::{lex, token_span, LexErrorKind};

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    let output = lex(source, interner);
    assert!(output.errors.is_empty(), "{:?}", output.errors);
    output.tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_lambda_definition() {
    let interner = StringInterner::new();
    let add = interner.intern("add");
    let x = interner.intern("x");
    let y = interner.intern("y");

    assert_eq!(
        kinds("add = lambda x, y { x + y }", &interner),
        vec![
            TokenKind::Ident(add),
            TokenKind::Eq,
            TokenKind::Lambda,
            TokenKind::Ident(x),
            TokenKind::Comma,
            TokenKind::Ident(y),
            TokenKind::LBrace,
            TokenKind::Ident(x),
            TokenKind::Operator(BinaryOp::Add),
            TokenKind::Ident(y),
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_all_operators() {
    let interner = StringInterner::new();
    let ops: Vec<_> = kinds("+ - * / % == != < > <= >=", &interner)
        .into_iter()
        .filter_map(|k| match k {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        })
        .collect();
    assert_eq!(
        ops,
        vec![
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Mod,
            BinaryOp::Eq,
            BinaryOp::NotEq,
            BinaryOp::Lt,
            BinaryOp::Gt,
            BinaryOp::LtEq,
            BinaryOp::GtEq,
        ]
    );
}

#[test]
fn test_two_char_operators_win_over_prefixes() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("a==b", &interner)[1],
        TokenKind::Operator(BinaryOp::Eq)
    );
    assert_eq!(kinds("a=b", &interner)[1], TokenKind::Eq);
    assert_eq!(
        kinds("a<=b", &interner)[1],
        TokenKind::Operator(BinaryOp::LtEq)
    );
}

#[test]
fn test_numbers() {
    let interner = StringInterner::new();
    let numbers: Vec<_> = kinds("0 42 2.5 1e3 6.02E-2", &interner)
        .iter()
        .filter_map(TokenKind::as_number)
        .collect();
    assert_eq!(numbers, vec![0.0, 42.0, 2.5, 1000.0, 0.0602]);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let interner = StringInterner::new();
    let name = interner.intern("lambdas");
    assert_eq!(
        kinds("lambdas", &interner),
        vec![TokenKind::Ident(name), TokenKind::Eof]
    );
}

#[test]
fn test_comments_and_newlines_are_not_tokens() {
    let interner = StringInterner::new();
    let source = "# lambda functions\nx = 1 # trailing\n\ny";
    let output = lex(source, &interner);
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind.category()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenCategory::Ident,
            TokenCategory::Operator,
            TokenCategory::Number,
            TokenCategory::Ident,
            TokenCategory::Eof,
        ]
    );
}

#[test]
fn test_newline_flags() {
    let interner = StringInterner::new();
    let output = lex("a = 1\nb(2)\n", &interner);
    let tokens = &output.tokens;

    assert!(!tokens.flags(0).has_newline_before());
    assert!(!tokens.flags(1).has_newline_before());
    assert!(tokens.flags(3).has_newline_before());
    assert!(!tokens.flags(4).has_newline_before());
    // The trailing newline is recorded on Eof.
    assert!(tokens.flags(tokens.len() - 1).has_newline_before());
}

#[test]
fn test_spans() {
    let interner = StringInterner::new();
    let output = lex("print(squared)", &interner);
    let spans: Vec<_> = output.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 5),
            Span::new(5, 6),
            Span::new(6, 13),
            Span::new(13, 14),
            Span::point(14),
        ]
    );
}

#[test]
fn test_exactly_one_eof() {
    let interner = StringInterner::new();
    for source in ["", "   ", "# only a comment", "x"] {
        let output = lex(source, &interner);
        let eofs = output
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Eof)
            .count();
        assert_eq!(eofs, 1, "{source:?}");
        assert_eq!(output.tokens.as_slice().last().map(|t| t.kind), Some(TokenKind::Eof));
    }
}

#[test]
fn test_unexpected_character_has_position() {
    let interner = StringInterner::new();
    let output = lex("x = 1 $ 2", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnexpectedChar('$'));
    assert_eq!(output.errors[0].span, Span::new(6, 7));
    assert_eq!(output.errors[0].to_string(), "unexpected character '$'");
    // Lexing continues past the error.
    assert_eq!(output.tokens.len(), 5);
}

#[test]
fn test_every_bad_character_is_reported() {
    let interner = StringInterner::new();
    let output = lex("a @ b ! c \"d\"", &interner);
    let chars: Vec<_> = output
        .errors
        .iter()
        .map(|e| match e.kind {
            LexErrorKind::UnexpectedChar(c) => c,
            LexErrorKind::InvalidNumber | LexErrorKind::SourceTooLarge => '?',
        })
        .collect();
    assert_eq!(chars, vec!['@', '!', '"', '"']);
}

#[test]
fn test_non_ascii_character() {
    let interner = StringInterner::new();
    let output = lex("x = \u{20ac}", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        output.errors[0].kind,
        LexErrorKind::UnexpectedChar('\u{20ac}')
    );
    assert_eq!(output.errors[0].span.start, 4);
}

#[test]
fn test_overflowing_number_is_invalid() {
    let interner = StringInterner::new();
    let output = lex("1e400", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidNumber);
}

#[test]
fn test_offsets_past_u32_are_an_error() {
    assert_eq!(token_span(3..7), Ok(Span::new(3, 7)));

    let past = u32::MAX as usize + 1;
    let Err(error) = token_span(past..past + 1) else {
        panic!("expected an error past u32::MAX");
    };
    assert_eq!(error.kind, LexErrorKind::SourceTooLarge);
    assert_eq!(error.code(), ErrorCode::E0003);
    assert_eq!(error.to_string(), "source too large to lex");
}
