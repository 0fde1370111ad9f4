//! Error codes for all diagnostics.

use std::fmt;

/// Error codes, `E####`, where the first digit is the phase:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E6xxx: evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that starts no token
    E0001,
    /// Number literal that does not fit an f64
    E0002,
    /// Source larger than 4 GiB
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Duplicate lambda parameter
    E1002,

    // Evaluation Errors (E6xxx)
    /// Name not bound in any enclosing scope
    E6001,
    /// Called value is not a function
    E6002,
    /// Wrong number of arguments
    E6003,
    /// Division or remainder by zero
    E6004,
    /// Operation applied to the wrong kind of value
    E6005,
    /// Rebinding a builtin name
    E6006,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
        }
    }

    /// One-line explanation, shown by `curly explain`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character: the character does not start any token",
            ErrorCode::E0002 => "invalid number literal",
            ErrorCode::E0003 => "source too large: offsets must fit in 32 bits",
            ErrorCode::E1001 => "unexpected token: the parser expected something else here",
            ErrorCode::E1002 => "a lambda lists the same parameter name twice",
            ErrorCode::E6001 => "unbound name: no enclosing scope defines this name",
            ErrorCode::E6002 => "not callable: only lambdas and builtins can be called",
            ErrorCode::E6003 => "arity mismatch: wrong number of arguments for the call",
            ErrorCode::E6004 => "division by zero: the right operand of '/' or '%' is zero",
            ErrorCode::E6005 => "type mismatch: the operation does not apply to this kind of value",
            ErrorCode::E6006 => "builtins 'map', 'filter', 'list', 'print' and 'len' cannot be rebound",
        }
    }

    /// Parse a code such as `E6004` (case-insensitive).
    pub fn from_code(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    pub fn is_lexer_error(self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_eval_error(self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
