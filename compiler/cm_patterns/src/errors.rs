//! Errors raised while matching and dispatching.
//!
//! An ordinary non-match is `Ok(None)`, never an error. These are the
//! cases where the match cannot be decided: the pattern text does not
//! parse, a positional constructor pattern meets a value with no
//! constructor arguments, or an exhaustive dispatch runs out of arms.
//!
//! Factory functions are the public API; they fill in both `kind` and
//! `message`.

use std::fmt;

use cm_diagnostic::{Diagnostic, ErrorCode};
use cm_parse::ParseError;

use crate::Value;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// An arm's pattern text failed to parse.
    InvalidPattern { pattern: String, error: ParseError },
    /// `Name([...])` against a value tagged `Name` that was not built by a
    /// case class.
    NotCaseClass { type_name: String },
    /// No arm matched in an exhaustive dispatch.
    NonExhaustive,
}

impl MatchErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidPattern { .. } => ErrorCode::E3001,
            Self::NotCaseClass { .. } => ErrorCode::E3002,
            Self::NonExhaustive => ErrorCode::E3003,
        }
    }
}

impl fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, error } => {
                write!(f, "invalid pattern `{pattern}`: {}", error.message)
            }
            Self::NotCaseClass { type_name } => write!(
                f,
                "`{type_name}` value was not built by a case class and has no constructor arguments"
            ),
            Self::NonExhaustive => write!(f, "non-exhaustive match"),
        }
    }
}

/// Error from matching or dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchError {
    pub kind: MatchErrorKind,
    /// Human-readable message. Equals `kind.to_string()` unless the
    /// factory added detail.
    pub message: String,
    /// Secondary context lines.
    pub notes: Vec<String>,
}

impl MatchError {
    /// Create an error from a kind, using the kind's message.
    #[cold]
    pub fn from_kind(kind: MatchErrorKind) -> Self {
        MatchError {
            message: kind.to_string(),
            kind,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a [`Diagnostic`].
    ///
    /// For an invalid pattern, spans index the arm's pattern text.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(&self.message);

        match &self.kind {
            MatchErrorKind::InvalidPattern { error, .. } => {
                let parse = error.to_diagnostic();
                diag = diag.with_note(format!("[{}] {}", parse.code, parse.message));
                diag.labels.extend(parse.labels);
                for suggestion in parse.suggestions {
                    diag = diag.with_suggestion(suggestion);
                }
            }
            MatchErrorKind::NotCaseClass { type_name } => {
                diag = diag.with_suggestion(format!(
                    "match its properties with `{type_name}({{...}})` instead"
                ));
            }
            MatchErrorKind::NonExhaustive => {
                diag = diag.with_suggestion("add a final `_` arm");
            }
        }

        for note in &self.notes {
            diag = diag.with_note(note);
        }
        diag
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            MatchErrorKind::InvalidPattern { error, .. } => Some(error),
            MatchErrorKind::NotCaseClass { .. } | MatchErrorKind::NonExhaustive => None,
        }
    }
}

// Factory functions

/// Pattern text failed to parse.
#[cold]
pub fn invalid_pattern(pattern: &str, error: ParseError) -> MatchError {
    MatchError::from_kind(MatchErrorKind::InvalidPattern {
        pattern: pattern.to_string(),
        error,
    })
}

/// Positional constructor pattern against a value with no constructor
/// arguments.
#[cold]
pub fn not_case_class(type_name: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::NotCaseClass {
        type_name: type_name.to_string(),
    })
}

/// No arm matched `value`.
#[cold]
pub fn non_exhaustive_match(value: &Value) -> MatchError {
    let mut error = MatchError::from_kind(MatchErrorKind::NonExhaustive);
    error.message = format!("non-exhaustive match: no arm matched {value}");
    error
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
