//! Token cursor for navigating the token stream.

use curly_ir::{Name, Span, StringInterner, Token, TokenFlags, TokenKind, TokenList};

use crate::{ErrorContext, ParseError};

/// Position in a token stream plus lookahead and consumption helpers.
///
/// The last token is always `Eof`, and the cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.as_slice().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Used to check that error recovery made progress.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn current_flags(&self) -> TokenFlags {
        self.tokens.flags(self.pos)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Kind of the token after the current one.
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume `kind` or fail with an error naming what was expected.
    pub fn expect(&mut self, kind: TokenKind, context: ErrorContext) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(kind.display_name(), context))
        }
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self, context: ErrorContext) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name, span))
        } else {
            Err(self.unexpected("identifier", context))
        }
    }

    /// Error at the current token.
    #[cold]
    pub fn unexpected(&self, expected: &str, context: ErrorContext) -> ParseError {
        ParseError::unexpected_token(expected, self.describe_current(), self.current_span())
            .with_context(context)
    }

    /// Describe the current token for an error message, e.g. `identifier 'x'`.
    pub fn describe_current(&self) -> String {
        match self.current_kind() {
            TokenKind::Ident(name) => format!("identifier '{}'", self.interner.lookup(name)),
            TokenKind::Number(bits) => {
                format!("number {}", curly_ir::format_number(f64::from_bits(bits)))
            }
            kind => kind.display_name().to_owned(),
        }
    }
}
