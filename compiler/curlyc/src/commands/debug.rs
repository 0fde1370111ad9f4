//! Debug commands: `lex` and `parse` for inspecting the front end.

use curly_ir::StringInterner;

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();
    let output = curly_lexer::lex(&content, &interner);

    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for (i, tok) in output.tokens.iter().enumerate() {
        let flags = output.tokens.flags(i);
        let marker = if flags.has_newline_before() { " (new line)" } else { "" };
        println!("  {:?} @ {}{marker}", tok.kind, tok.span);
    }

    if output.has_errors() {
        println!();
        println!("Errors:");
        for error in &output.errors {
            println!("  {}: {error}", error.span);
        }
    }
}

/// Parse a file and display each statement in canonical form.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();
    let lexed = curly_lexer::lex(&content, &interner);
    let parsed = curly_parse::parse(&lexed.tokens, &interner);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", parsed.program.len());
    println!("  Expressions: {}", parsed.arena.expr_count());
    println!("  Errors: {}", lexed.errors.len() + parsed.errors.len());

    if !parsed.program.is_empty() {
        println!();
        println!("Statements:");
        for &stmt in &parsed.program.statements {
            let span = parsed.arena.get_expr(stmt).span;
            let text = curly_fmt::format_expr(&parsed.arena, &interner, stmt);
            println!("  {span}: {text}");
        }
    }

    if lexed.has_errors() || parsed.has_errors() {
        println!();
        println!("Errors:");
        for error in &lexed.errors {
            println!("  {}: {error}", error.span);
        }
        for error in &parsed.errors {
            println!("  {}: {}", error.span, error.message());
        }
    }
}
