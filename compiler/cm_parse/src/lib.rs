//! Parser for the casematch pattern language.
//!
//! ```text
//! {x: {a, b}, y: [c, d], z: e}     object with nested destructuring
//! [, x, y, , z]                    array with empty slots
//! Pair([x, _])                     case-class constructor arguments
//! Some({value})                    constructor tag plus keyed properties
//! ```
//!
//! [`parse_pattern`] is the entry point. Parsing is pure and deterministic:
//! the same text always yields the same [`Pattern`].

mod cursor;
mod error;
mod parser;
mod series;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};
pub use parser::Parser;
pub use series::{Blanks, SeriesConfig};

use cm_ir::Pattern;

/// Parse pattern text into a [`Pattern`].
///
/// Leading and trailing whitespace is ignored; anything else after the
/// pattern is an error.
pub fn parse_pattern(text: &str) -> Result<Pattern, ParseError> {
    Parser::new(text).parse()
}

/// Parse text that must be a constructor pattern such as `Pair([a, b])`.
pub fn parse_constructor(text: &str) -> Result<Pattern, ParseError> {
    Parser::new(text).parse_constructor()
}
