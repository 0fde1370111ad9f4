//! Call expressions.

use curly_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse a primary followed by any number of calls: `f(a)(b)`.
    pub(crate) fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;
        // A `(` on the next top-level line starts a new statement.
        while self.cursor.check(TokenKind::LParen) && !self.at_line_break() {
            expr = self.parse_call(expr)?;
        }
        Ok(expr)
    }

    fn parse_call(&mut self, func: ExprId) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        let (args, end) = self.nested(|p| {
            let args = p.parse_comma_list(TokenKind::RParen, ErrorContext::CallArguments)?;
            let end = p.cursor.expect(TokenKind::RParen, ErrorContext::CallArguments)?;
            Ok::<_, ParseError>((args, end))
        })?;
        let args = self.arena.alloc_expr_list(args);
        let span = self.span_of(func).merge(end);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Call { func, args }, span)))
    }

    /// Parse `expr (',' expr)* ','?` up to (not including) `close`.
    pub(crate) fn parse_comma_list(
        &mut self,
        close: TokenKind,
        context: ErrorContext,
    ) -> Result<Vec<ExprId>, ParseError> {
        let mut items = Vec::new();
        while !self.cursor.check(close) {
            items.push(self.parse_expr()?);
            if self.cursor.check(TokenKind::Comma) {
                self.cursor.advance();
            } else if !self.cursor.check(close) {
                let expected = format!("',' or {}", close.display_name());
                return Err(self.cursor.unexpected(&expected, context));
            }
        }
        Ok(items)
    }
}
