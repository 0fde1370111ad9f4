//! Primary expressions: literals, identifiers, lists, lambdas, parentheses.

use curly_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            TokenKind::Number(bits) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Number(bits), span)))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Ident(name), span)))
            }
            TokenKind::LBracket => self.parse_list(),
            TokenKind::Lambda => self.parse_lambda(),
            TokenKind::LParen => self.parse_parenthesized(),
            _ => Err(self
                .cursor
                .unexpected("expression", ErrorContext::Expression)),
        }
    }

    /// `[a, b, c]`; a trailing comma is allowed.
    fn parse_list(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let (items, end) = self.nested(|p| {
            let items = p.parse_comma_list(TokenKind::RBracket, ErrorContext::ListLiteral)?;
            let end = p.cursor.expect(TokenKind::RBracket, ErrorContext::ListLiteral)?;
            Ok::<_, ParseError>((items, end))
        })?;
        let items = self.arena.alloc_expr_list(items);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::List(items), start.merge(end))))
    }

    /// `lambda p1, p2 { body }` with a single-expression body.
    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;

        let mut params = Vec::new();
        loop {
            let (name, span) = self.cursor.expect_ident(ErrorContext::LambdaParams)?;
            if params.contains(&name) {
                let text = self.cursor.interner().lookup(name);
                return Err(ParseError::duplicate_param(text, span));
            }
            params.push(name);
            if !self.cursor.check(TokenKind::Comma) {
                break;
            }
            self.cursor.advance();
        }

        self.cursor
            .expect(TokenKind::LBrace, ErrorContext::LambdaBody)?;
        let (body, end) = self.nested(|p| {
            let body = p.parse_expr()?;
            let end = p.cursor.expect(TokenKind::RBrace, ErrorContext::LambdaBody)?;
            Ok::<_, ParseError>((body, end))
        })?;

        let params = self.arena.alloc_params(params);
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Lambda { params, body },
            start.merge(end),
        )))
    }

    /// `( expr )`; grouping produces no node of its own.
    fn parse_parenthesized(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        self.nested(|p| {
            let inner = p.parse_expr()?;
            p.cursor
                .expect(TokenKind::RParen, ErrorContext::Parenthesized)?;
            Ok::<_, ParseError>(inner)
        })
    }
}
