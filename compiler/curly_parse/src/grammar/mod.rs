//! Grammar rules, one module per precedence tier.
//!
//! ```text
//! statement      := (IDENT '=' expression | expression) (NEWLINE | ';' | EOF)
//! expression     := comparison
//! comparison     := additive (('==' | '!=' | '<' | '>' | '<=' | '>=') additive)*
//! additive       := multiplicative (('+' | '-') multiplicative)*
//! multiplicative := unary (('*' | '/' | '%') unary)*
//! unary          := '-' unary | postfix
//! postfix        := primary ('(' arglist? ')')*
//! primary        := NUMBER | IDENT | list | lambda | '(' expression ')'
//! ```

mod expr;
mod postfix;
mod primary;

use curly_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement and its terminator.
    pub(crate) fn parse_statement(&mut self) -> Result<ExprId, ParseError> {
        let stmt = match (self.cursor.current_kind(), self.cursor.peek_next_kind()) {
            (TokenKind::Ident(target), TokenKind::Eq) => {
                let start = self.cursor.advance().span;
                self.cursor.advance();
                let value = self.parse_expr()?;
                let span = start.merge(self.span_of(value));
                self.arena
                    .alloc_expr(Expr::new(ExprKind::Assign { target, value }, span))
            }
            _ => self.parse_expr()?,
        };
        self.expect_statement_end()?;
        Ok(stmt)
    }

    /// A statement ends at `;`, end of input, or a token on a new line.
    fn expect_statement_end(&mut self) -> Result<(), ParseError> {
        if self.cursor.check(TokenKind::Semicolon) {
            self.cursor.advance();
            Ok(())
        } else if self.cursor.is_at_end() || self.at_line_break() {
            Ok(())
        } else {
            Err(self
                .cursor
                .unexpected("end of statement (newline or ';')", ErrorContext::Statement))
        }
    }
}
