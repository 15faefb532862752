//! Recursive-descent pattern parser.
//!
//! One method per production, one character of lookahead, no backtracking.
//! Whitespace is skipped before and after every pattern. The first violated
//! expectation is returned as a [`ParseError`].

mod literal;

use cm_ir::{FunctionArgs, ObjectEntry, Pattern, Span, Special};
use cm_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::cursor::Cursor;
use crate::series::SeriesConfig;
use crate::{ErrorContext, ParseError, ParseErrorKind};

/// Pattern parser over a single pattern string.
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Parse the whole input as one pattern.
    pub fn parse(mut self) -> Result<Pattern, ParseError> {
        let pattern = self.parse_pattern()?;
        self.finish()?;
        Ok(pattern)
    }

    /// Parse the whole input as a constructor pattern `Name(...)`.
    ///
    /// Unlike [`parse`](Self::parse), a bare identifier is rejected.
    pub fn parse_constructor(mut self) -> Result<Pattern, ParseError> {
        self.cursor.eat_whitespace();
        let pattern = self.parse_function(false)?;
        self.cursor.eat_whitespace();
        self.finish()?;
        Ok(pattern)
    }

    fn finish(&self) -> Result<(), ParseError> {
        if self.cursor.is_eof() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::TrailingInput, self.cursor.rest_span()))
        }
    }

    /// Build an error whose remainder starts at `span`.
    #[cold]
    pub(crate) fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        let remainder = self
            .cursor
            .source()
            .get(span.to_range().start..)
            .unwrap_or_default();
        ParseError::from_kind(kind, span, remainder)
    }

    #[cold]
    fn unexpected(&self, expected: &'static str) -> ParseError {
        let kind = match self.cursor.current() {
            Some(found) => ParseErrorKind::UnexpectedChar { found, expected },
            None => ParseErrorKind::UnexpectedEnd { expected },
        };
        self.error(kind, self.cursor.current_span())
    }

    /// `Pattern := Array | Object | Function | Identifier | IdentifierSpecial
    ///            | Number | String | Any`
    pub fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        ensure_sufficient_stack(|| {
            self.cursor.eat_whitespace();
            trace!(pos = self.cursor.pos(), "pattern");

            let pattern = match self.cursor.current() {
                Some('[') => self.parse_array(),
                Some('{') => self.parse_object(),
                Some(quote @ ('\'' | '"')) => self.parse_string(quote),
                Some(c) if c.is_ascii_digit() => self.parse_number(),
                Some(c) if is_identifier_start(c) => self.parse_function(true),
                _ => Err(self.unexpected("a pattern")),
            }
            .map_err(|e| e.in_context(ErrorContext::Pattern))?;

            self.cursor.eat_whitespace();
            Ok(pattern)
        })
    }

    /// `Array := "[" (Pattern? ",")* Pattern? "]"`
    fn parse_array(&mut self) -> Result<Pattern, ParseError> {
        self.array_elements().map(Pattern::Array)
    }

    fn array_elements(&mut self) -> Result<Vec<Pattern>, ParseError> {
        let open_span = self.cursor.current_span();
        if !self.cursor.eat('[') {
            return Err(self.unexpected("`[`").in_context(ErrorContext::Array));
        }
        let slots = self.series(&SeriesConfig::array(), open_span, Self::parse_pattern)?;
        Ok(slots
            .into_iter()
            .map(|slot| slot.unwrap_or(Pattern::Blank))
            .collect())
    }

    /// `Object := "{" ((ObjectElement ",")* ObjectElement)? "}"`
    fn parse_object(&mut self) -> Result<Pattern, ParseError> {
        self.object_entries().map(Pattern::Object)
    }

    fn object_entries(&mut self) -> Result<Vec<ObjectEntry>, ParseError> {
        let open_span = self.cursor.current_span();
        if !self.cursor.eat('{') {
            return Err(self.unexpected("`{`").in_context(ErrorContext::Object));
        }
        let slots = self.series(&SeriesConfig::object(), open_span, Self::parse_object_entry)?;
        // Objects forbid blanks, so every slot is filled.
        Ok(slots.into_iter().flatten().collect())
    }

    /// `ObjectElement := Identifier (":" Pattern)?`
    fn parse_object_entry(&mut self) -> Result<ObjectEntry, ParseError> {
        let (key, key_span) = self
            .parse_identifier()
            .map_err(|e| e.in_context(ErrorContext::ObjectEntry))?;
        self.cursor.eat_whitespace();
        let explicit = self.cursor.eat(':');

        // `_` never names a property; a literal word only with an explicit pattern.
        if key == "_" || (!explicit && Special::from_word(key).is_some()) {
            return Err(self
                .error(
                    ParseErrorKind::ReservedObjectKey {
                        key: key.to_string(),
                    },
                    key_span,
                )
                .in_context(ErrorContext::ObjectEntry));
        }

        if explicit {
            let value = self.parse_pattern()?;
            Ok(ObjectEntry::with_pattern(key, value))
        } else {
            Ok(ObjectEntry::shorthand(key))
        }
    }

    /// `Function := Identifier "(" (Object | Array)? ")"`
    ///
    /// With `accept_binder`, an identifier not followed by `(` is returned
    /// as a binder, wildcard or literal instead.
    pub fn parse_function(&mut self, accept_binder: bool) -> Result<Pattern, ParseError> {
        let (name, name_span) = self.parse_identifier()?;
        self.cursor.eat_whitespace();

        if self.cursor.current() != Some('(') {
            if accept_binder {
                return Ok(word_pattern(name));
            }
            return Err(self.unexpected("`(`").in_context(ErrorContext::Function));
        }

        if name == "_" || Special::from_word(name).is_some() {
            return Err(self
                .error(
                    ParseErrorKind::ReservedFunctionName {
                        name: name.to_string(),
                    },
                    name_span,
                )
                .in_context(ErrorContext::Function));
        }

        let open_span = self.cursor.current_span();
        self.cursor.advance();
        self.cursor.eat_whitespace();
        trace!(name, pos = self.cursor.pos(), "constructor pattern");

        let args = match self.cursor.current() {
            Some('[') => Some(FunctionArgs::Positional(self.array_elements()?)),
            Some('{') => Some(FunctionArgs::Keyed(self.object_entries()?)),
            _ => None,
        };
        self.cursor.eat_whitespace();

        match self.cursor.current() {
            Some(')') => self.cursor.advance(),
            Some(_) => {
                let expected = if args.is_some() {
                    "`)`"
                } else {
                    "`[`, `{` or `)`"
                };
                return Err(self.unexpected(expected).in_context(ErrorContext::Function));
            }
            None => {
                return Err(self
                    .error(
                        ParseErrorKind::Unclosed {
                            open: '(',
                            close: ')',
                            open_span,
                        },
                        self.cursor.current_span(),
                    )
                    .in_context(ErrorContext::Function));
            }
        }

        Ok(Pattern::Function {
            name: name.to_string(),
            args,
        })
    }

    /// `Identifier := [A-Za-z_$][A-Za-z0-9_$]*`
    ///
    /// Returns the raw word; reserved words are classified by the caller.
    fn parse_identifier(&mut self) -> Result<(&'a str, Span), ParseError> {
        let start = self.cursor.pos();
        match self.cursor.current() {
            Some(c) if is_identifier_start(c) => {}
            Some(found) => {
                return Err(self.error(
                    ParseErrorKind::InvalidIdentifier { found },
                    self.cursor.current_span(),
                ));
            }
            None => return Err(self.unexpected("an identifier")),
        }
        let word = self.cursor.eat_while(is_identifier_continue);
        Ok((word, self.cursor.span_from(start)))
    }
}

/// A bare word in pattern position.
fn word_pattern(word: &str) -> Pattern {
    if word == "_" {
        return Pattern::Any;
    }
    match Special::from_word(word) {
        Some(special) => Pattern::Special(special),
        None => Pattern::Identifier(word.to_string()),
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
