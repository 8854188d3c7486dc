//! Error codes for all front-end diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Function declaration without a parameter clause
    E1006,
    /// `:` used instead of `->` before a result type
    E1007,
    /// Expected pattern
    E1008,
    /// Keyword used as a pattern name
    E1009,
    /// `var`/`let` nested inside another `var`/`let`
    E1010,
    /// Variadic parameter with a default value
    E1011,
    /// Variadic parameter without a type annotation
    E1012,
    /// `...` on a parameter that is not last
    E1013,
    /// Default value outside a parameter clause
    E1014,
    /// Selector label without a parenthesized parameter
    E1015,
    /// Selector clause without exactly one parameter
    E1016,
    /// Curried clause after selector clauses
    E1017,
    /// Selector label defined twice
    E1018,
    /// Initializer without a parameter clause
    E1019,
    /// Expected declaration
    E1020,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
        ErrorCode::E1014,
        ErrorCode::E1015,
        ErrorCode::E1016,
        ErrorCode::E1017,
        ErrorCode::E1018,
        ErrorCode::E1019,
        ErrorCode::E1020,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            ErrorCode::E1018 => "E1018",
            ErrorCode::E1019 => "E1019",
            ErrorCode::E1020 => "E1020",
        }
    }

    /// One-line description for `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1006 => "function declaration without a parameter clause",
            ErrorCode::E1007 => "`:` used instead of `->` before a result type",
            ErrorCode::E1008 => "expected pattern",
            ErrorCode::E1009 => "keyword used as a pattern name",
            ErrorCode::E1010 => "`var`/`let` nested inside another `var`/`let` pattern",
            ErrorCode::E1011 => "variadic parameter with a default value",
            ErrorCode::E1012 => "variadic parameter without a type annotation",
            ErrorCode::E1013 => "`...` on a parameter that is not last",
            ErrorCode::E1014 => "default value outside a parameter clause",
            ErrorCode::E1015 => "selector label without a parenthesized parameter",
            ErrorCode::E1016 => "selector clause without exactly one parameter",
            ErrorCode::E1017 => "curried parameter clause after selector clauses",
            ErrorCode::E1018 => "selector label defined more than once",
            ErrorCode::E1019 => "initializer without a parameter clause",
            ErrorCode::E1020 => "expected declaration",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        !self.is_lexer_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1008"`.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}
