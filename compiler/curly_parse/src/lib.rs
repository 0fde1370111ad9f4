//! Recursive descent parser for Curly.
//!
//! Produces a flat AST in an [`ExprArena`] plus the list of top-level
//! statements. Statements end at a newline or `;`; inside brackets, braces
//! and parentheses newlines are insignificant.
//!
//! A statement that fails to parse is reported and skipped up to the next
//! statement boundary, so one run reports every broken statement.

mod cursor;
mod error;
mod grammar;

use curly_ir::{ExprArena, ExprId, Program, Span, StringInterner, TokenKind, TokenList};

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

/// Result of parsing: the program, its arena, and any errors.
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    /// Depth of open `(`, `[` and `{`. Newlines only end statements at depth 0.
    nesting: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            nesting: 0,
        }
    }

    /// Parse every statement until end of input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        loop {
            while self.cursor.check(TokenKind::Semicolon) {
                self.cursor.advance();
            }
            if self.cursor.is_at_end() {
                break;
            }

            let start = self.cursor.position();
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    tracing::debug!(%error, span = %error.span, "parse error");
                    errors.push(error);
                    self.synchronize(start);
                }
            }
        }

        tracing::debug!(
            statements = statements.len(),
            exprs = self.arena.expr_count(),
            errors = errors.len(),
            "parsed"
        );

        ParseOutput {
            program: Program::new(statements),
            arena: self.arena,
            errors,
        }
    }

    /// Skip to the next statement boundary after an error in the statement
    /// that began at token `start`.
    ///
    /// Only stops past `start`, so a statement that fails on its first token
    /// still makes progress.
    fn synchronize(&mut self, start: usize) {
        self.nesting = 0;
        while !self.cursor.is_at_end() {
            let at_boundary = self.cursor.check(TokenKind::Semicolon)
                || self.cursor.current_flags().has_newline_before();
            if at_boundary && self.cursor.position() > start {
                return;
            }
            self.cursor.advance();
        }
    }

    /// Run `f` inside a bracketed region where newlines do not end statements.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.nesting += 1;
        let result = f(self);
        self.nesting -= 1;
        result
    }

    /// A newline before the current token ends the statement at top level.
    #[inline]
    fn at_line_break(&self) -> bool {
        self.nesting == 0 && self.cursor.current_flags().has_newline_before()
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}
