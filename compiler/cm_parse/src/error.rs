//! Parse error types.
//!
//! Every failure is described by a [`ParseErrorKind`], which owns the
//! message text, the error code and any hint. [`ParseError`] adds the
//! location, the unconsumed input, and the production that was running.

use std::fmt;

use cm_diagnostic::{Diagnostic, ErrorCode};
use cm_ir::Span;

/// Production that was running when an error occurred.
///
/// Used for "while parsing X" labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Pattern,
    Array,
    Object,
    ObjectEntry,
    Function,
    Number,
    String,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Pattern => "a pattern",
            Self::Array => "an array pattern",
            Self::Object => "an object pattern",
            Self::ObjectEntry => "an object entry",
            Self::Function => "a constructor pattern",
            Self::Number => "a number literal",
            Self::String => "a string literal",
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A character that cannot appear here.
    UnexpectedChar { found: char, expected: &'static str },
    /// Input ended where a pattern was required.
    UnexpectedEnd { expected: &'static str },
    /// Input ended inside `[...]`, `{...}` or `Name(...)`.
    Unclosed { open: char, close: char, open_span: Span },
    /// A bare `,` in an object pattern.
    BlankNotAllowed,
    /// An object key or constructor name that does not start like an
    /// identifier.
    InvalidIdentifier { found: char },
    /// `true(...)`, `_(...)` and friends.
    ReservedFunctionName { name: String },
    /// `{_}` or `{null}` used as a binder.
    ReservedObjectKey { key: String },
    UnterminatedString { quote: char },
    InvalidNumber { text: String },
    /// Input left over after a complete pattern.
    TrailingInput,
}

impl ParseErrorKind {
    /// Error code for this kind.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnexpectedChar { .. } => ErrorCode::E1001,
            Self::UnexpectedEnd { .. } => ErrorCode::E1002,
            Self::Unclosed { .. } => ErrorCode::E1003,
            Self::InvalidIdentifier { .. } => ErrorCode::E1004,
            Self::BlankNotAllowed => ErrorCode::E1005,
            Self::ReservedFunctionName { .. } => ErrorCode::E1006,
            Self::ReservedObjectKey { .. } => ErrorCode::E1007,
            Self::UnterminatedString { .. } => ErrorCode::E1008,
            Self::InvalidNumber { .. } => ErrorCode::E1009,
            Self::TrailingInput => ErrorCode::E1010,
        }
    }

    /// Primary error message.
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedChar { found, expected } => {
                format!("expected {expected}, found `{found}`")
            }
            Self::UnexpectedEnd { expected } => {
                format!("expected {expected}, found end of pattern")
            }
            Self::Unclosed { open, close, .. } => {
                format!("unclosed `{open}`: expected `{close}` before end of pattern")
            }
            Self::BlankNotAllowed => "empty element in object pattern".to_string(),
            Self::InvalidIdentifier { found } => {
                format!("expected an identifier, found `{found}`")
            }
            Self::ReservedFunctionName { name } => {
                format!("`{name}` cannot be used as a constructor name")
            }
            Self::ReservedObjectKey { key } => {
                format!("`{key}` cannot be bound as an object key")
            }
            Self::UnterminatedString { quote } => {
                format!("unterminated string literal: missing closing `{quote}`")
            }
            Self::InvalidNumber { text } => format!("invalid number literal `{text}`"),
            Self::TrailingInput => "unexpected input after pattern".to_string(),
        }
    }

    /// Actionable hint, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Unclosed { close, .. } => Some(format!("add `{close}`")),
            Self::BlankNotAllowed => {
                Some("only array patterns may leave a slot empty, as in `[, x]`".to_string())
            }
            Self::ReservedFunctionName { name } if name == "_" => {
                Some("`_` is the wildcard; match any value with a bare `_`".to_string())
            }
            Self::ReservedFunctionName { name } => {
                Some(format!("`{name}` is a literal; match it with a bare `{name}`"))
            }
            Self::ReservedObjectKey { key } if key == "_" => {
                Some("`_` binds nothing; name the property instead".to_string())
            }
            Self::ReservedObjectKey { key } => {
                Some(format!("give the property an explicit pattern: `{key}: x`"))
            }
            Self::InvalidNumber { .. } => Some(
                "numbers are digits with an optional single fractional digit \
                 and exponent, as in `12`, `1.5` or `2.5e3`"
                    .to_string(),
            ),
            Self::UnexpectedChar { .. }
            | Self::UnexpectedEnd { .. }
            | Self::InvalidIdentifier { .. }
            | Self::UnterminatedString { .. }
            | Self::TrailingInput => None,
        }
    }
}

/// Parse error with location and the input left unconsumed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error in the pattern text.
    pub span: Span,
    /// Unconsumed input starting at the error position.
    pub remainder: String,
    /// Production that was running.
    pub context: Option<ErrorContext>,
    /// Hints for fixing the error.
    pub help: Vec<String>,
}

impl ParseError {
    /// Create a parse error from a kind.
    #[cold]
    pub fn from_kind(kind: ParseErrorKind, span: Span, remainder: impl Into<String>) -> Self {
        let help = kind.hint().into_iter().collect();
        ParseError {
            code: kind.error_code(),
            message: kind.message(),
            kind,
            span,
            remainder: remainder.into(),
            context: None,
            help,
        }
    }

    /// Record the production that was running.
    ///
    /// Keeps the innermost context if one was already set.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// Add a help message.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Convert to a [`Diagnostic`] for rendering against the pattern text.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.context {
            Some(context) => format!("while parsing {}", context.description()),
            None => "here".to_string(),
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label);

        if let ParseErrorKind::Unclosed { open, open_span, .. } = &self.kind {
            diag = diag.with_secondary_label(*open_span, format!("`{open}` opened here"));
        }

        for help in &self.help {
            diag = diag.with_suggestion(help);
        }

        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)?;
        if !self.remainder.is_empty() {
            write!(f, " (remaining input: `{}`)", self.remainder)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
