//! Number and string literals.

use cm_ir::Pattern;

use super::{is_identifier_continue, Parser};
use crate::{ErrorContext, ParseError, ParseErrorKind};

impl Parser<'_> {
    /// `Number := digits ("." digit ("e" digits)?)?`
    pub(super) fn parse_number(&mut self) -> Result<Pattern, ParseError> {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.eat('.') {
            if !self.eat_digit() {
                return Err(self.invalid_number(start));
            }
            if self.cursor.eat('e') && self.cursor.eat_while(|c| c.is_ascii_digit()).is_empty() {
                return Err(self.invalid_number(start));
            }
        }

        // `1.25`, `1e5` and `12abc` are not split into a number and a rest.
        if self
            .cursor
            .current()
            .is_some_and(|c| c == '.' || is_identifier_continue(c))
        {
            return Err(self.invalid_number(start));
        }

        // Overflowing literals like `9.9e999` would read as infinity.
        match self.cursor.slice_from(start).parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Pattern::Number(value)),
            _ => Err(self.invalid_number(start)),
        }
    }

    fn eat_digit(&mut self) -> bool {
        if self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Consume the rest of the malformed literal and report all of it.
    #[cold]
    fn invalid_number(&mut self, start: usize) -> ParseError {
        self.cursor
            .eat_while(|c| c == '.' || is_identifier_continue(c));
        let text = self.cursor.slice_from(start).to_string();
        self.error(
            ParseErrorKind::InvalidNumber { text },
            self.cursor.span_from(start),
        )
        .in_context(ErrorContext::Number)
    }

    /// `String := "'" ... "'" | '"' ... '"'`
    ///
    /// Escapes: `\n`, `\t`, `\r`, `\0`; any other escaped character stands
    /// for itself, so `\'`, `\"` and `\\` work in either quote style.
    pub(super) fn parse_string(&mut self, quote: char) -> Result<Pattern, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance();
        let mut value = String::new();

        loop {
            let Some(c) = self.cursor.current() else {
                return Err(self.unterminated_string(start, quote));
            };
            self.cursor.advance();

            if c == quote {
                break;
            }
            if c != '\\' {
                value.push(c);
                continue;
            }

            let Some(escaped) = self.cursor.current() else {
                return Err(self.unterminated_string(start, quote));
            };
            self.cursor.advance();
            value.push(match escaped {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                '0' => '\0',
                other => other,
            });
        }

        Ok(Pattern::String(value))
    }

    #[cold]
    fn unterminated_string(&self, start: usize, quote: char) -> ParseError {
        self.error(
            ParseErrorKind::UnterminatedString { quote },
            self.cursor.span_from(start),
        )
        .in_context(ErrorContext::String)
    }
}
