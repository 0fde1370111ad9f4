//! Lexer output: tokens, token kinds and per-token layout flags.

use std::fmt;
use std::ops::Index;

use crate::{BinaryOp, Name, Span};

/// A token with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Numbers are stored as `f64` bits so the kind stays `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Ident(Name),
    Number(u64),
    /// `lambda`
    Lambda,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `+ - * / % == != < > <= >=`
    Operator(BinaryOp),
    /// `=`
    Eq,
    /// `;`
    Semicolon,
    Eof,
}

/// Coarse token classification.
///
/// `=` counts as an operator; `;` is the only separator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenCategory {
    Ident,
    Number,
    Lambda,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Operator,
    Separator,
    Eof,
}

impl TokenKind {
    /// Number token from an `f64`.
    #[inline]
    pub fn number(value: f64) -> Self {
        TokenKind::Number(value.to_bits())
    }

    /// Value of a number token.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenKind::Number(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Ident(_) => TokenCategory::Ident,
            TokenKind::Number(_) => TokenCategory::Number,
            TokenKind::Lambda => TokenCategory::Lambda,
            TokenKind::LBrace => TokenCategory::LBrace,
            TokenKind::RBrace => TokenCategory::RBrace,
            TokenKind::LParen => TokenCategory::LParen,
            TokenKind::RParen => TokenCategory::RParen,
            TokenKind::LBracket => TokenCategory::LBracket,
            TokenKind::RBracket => TokenCategory::RBracket,
            TokenKind::Comma => TokenCategory::Comma,
            TokenKind::Operator(_) | TokenKind::Eq => TokenCategory::Operator,
            TokenKind::Semicolon => TokenCategory::Separator,
            TokenKind::Eof => TokenCategory::Eof,
        }
    }

    /// Human-readable name for error messages.
    ///
    /// Identifiers and numbers are described by category only; callers
    /// with access to the interner or source add the literal text.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Number(_) => "number",
            TokenKind::Lambda => "'lambda'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Operator(op) => match op {
                BinaryOp::Add => "'+'",
                BinaryOp::Sub => "'-'",
                BinaryOp::Mul => "'*'",
                BinaryOp::Div => "'/'",
                BinaryOp::Mod => "'%'",
                BinaryOp::Eq => "'=='",
                BinaryOp::NotEq => "'!='",
                BinaryOp::Lt => "'<'",
                BinaryOp::Gt => "'>'",
                BinaryOp::LtEq => "'<='",
                BinaryOp::GtEq => "'>='",
            },
            TokenKind::Eq => "'='",
            TokenKind::Semicolon => "';'",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Per-token layout flags packed into a single byte.
///
/// Newlines are not tokens; these flags record what preceded each token so
/// the parser can find statement boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// A newline preceded this token.
    pub const NEWLINE_BEFORE: u8 = 1 << 0;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }
}

/// Token stream produced by the lexer, always terminated by `Eof`.
///
/// Keeps a parallel `flags` array, one entry per token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    flags: Vec<TokenFlags>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push_with_flags(&mut self, token: Token, flags: TokenFlags) {
        self.tokens.push(token);
        self.flags.push(flags);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Flags of the token at `index`; empty past the end.
    #[inline]
    pub fn flags(&self, index: usize) -> TokenFlags {
        self.flags.get(index).copied().unwrap_or_default()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 16);
    crate::static_assert_size!(Token, 24);
}
