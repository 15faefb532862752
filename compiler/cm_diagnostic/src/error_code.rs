use std::fmt;

/// Error codes for all engine diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Pattern syntax errors
/// - E3xxx: Match and dispatch errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected character
    E1001,
    /// Unexpected end of pattern
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Invalid identifier
    E1004,
    /// Blank element where blanks are not allowed
    E1005,
    /// Reserved word used as a constructor name
    E1006,
    /// Reserved word used as an object key
    E1007,
    /// Unterminated string literal
    E1008,
    /// Invalid number literal
    E1009,
    /// Trailing input after a complete pattern
    E1010,

    // Match Errors (E3xxx)
    /// Pattern text failed to parse during dispatch
    E3001,
    /// Positional constructor pattern against a value that is not a case class
    E3002,
    /// No arm matched in an exhaustive dispatch
    E3003,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Parser
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
            // Match
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected character in pattern",
            ErrorCode::E1002 => "unexpected end of pattern",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "invalid identifier",
            ErrorCode::E1005 => "blank element not allowed here",
            ErrorCode::E1006 => "reserved word used as constructor name",
            ErrorCode::E1007 => "reserved word used as object key",
            ErrorCode::E1008 => "unterminated string literal",
            ErrorCode::E1009 => "invalid number literal",
            ErrorCode::E1010 => "trailing input after pattern",
            ErrorCode::E3001 => "invalid pattern in match arm",
            ErrorCode::E3002 => "value is not a case class instance",
            ErrorCode::E3003 => "non-exhaustive match",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
