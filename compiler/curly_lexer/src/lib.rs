//! Lexer for Curly using logos.
//!
//! Produces a [`TokenList`] terminated by exactly one `Eof` token.
//! Whitespace, newlines and `#` comments are not tokens: newlines are
//! recorded as [`TokenFlags::NEWLINE_BEFORE`] on the token that follows
//! them, which is all the parser needs to split statements.
//!
//! Lexing never stops early. Every character that starts no token becomes
//! a [`LexError`] and is skipped.

mod lex_error;

use curly_ir::{BinaryOp, Span, StringInterner, Token, TokenFlags, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\x0C]+")]
enum RawToken {
    #[regex(r"#[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("lambda")]
    Lambda,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().parse::<f64>().ok().filter(|v| v.is_finite())
    })]
    Number(f64),

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // Operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
}

/// Result of lexing: the tokens plus every error found along the way.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source`, interning identifiers into `interner`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 2 + 1),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);
    let mut pending = TokenFlags::EMPTY;

    while let Some(result) = logos.next() {
        let span = match token_span(logos.span()) {
            Ok(span) => span,
            Err(error) => {
                output.errors.push(error);
                break;
            }
        };

        let kind = match result {
            Ok(RawToken::Newline) => {
                pending.set(TokenFlags::NEWLINE_BEFORE);
                continue;
            }
            Ok(raw) => match convert_token(raw, logos.slice(), interner) {
                Some(kind) => kind,
                None => continue,
            },
            Err(()) => {
                let error = lex_error(logos.slice(), span);
                tracing::debug!(%error, %span, "lex error");
                output.errors.push(error);
                continue;
            }
        };

        output.tokens.push_with_flags(Token::new(kind, span), pending);
        pending = TokenFlags::EMPTY;
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    output
        .tokens
        .push_with_flags(Token::new(TokenKind::Eof, Span::point(eof)), pending);

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

/// Span of a token, or an error once offsets no longer fit in a `Span`.
fn token_span(range: std::ops::Range<usize>) -> Result<Span, LexError> {
    Span::try_from_range(range).map_err(|_| LexError::source_too_large(Span::point(u32::MAX)))
}

/// Map a raw token to its kind; `None` for trivia.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Lambda => TokenKind::Lambda,
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::Number(value) => TokenKind::number(value),
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::Operator(BinaryOp::Eq),
        RawToken::NotEq => TokenKind::Operator(BinaryOp::NotEq),
        RawToken::LtEq => TokenKind::Operator(BinaryOp::LtEq),
        RawToken::GtEq => TokenKind::Operator(BinaryOp::GtEq),
        RawToken::Lt => TokenKind::Operator(BinaryOp::Lt),
        RawToken::Gt => TokenKind::Operator(BinaryOp::Gt),
        RawToken::Plus => TokenKind::Operator(BinaryOp::Add),
        RawToken::Minus => TokenKind::Operator(BinaryOp::Sub),
        RawToken::Star => TokenKind::Operator(BinaryOp::Mul),
        RawToken::Slash => TokenKind::Operator(BinaryOp::Div),
        RawToken::Percent => TokenKind::Operator(BinaryOp::Mod),
        RawToken::LineComment | RawToken::Newline => return None,
    };
    Some(kind)
}

fn lex_error(slice: &str, span: Span) -> LexError {
    match slice.chars().next() {
        Some(ch) if ch.is_ascii_digit() => LexError::invalid_number(span),
        Some(ch) => LexError::unexpected_char(ch, span),
        None => LexError::invalid_number(span),
    }
}

#[cfg(test)]
mod tests;
