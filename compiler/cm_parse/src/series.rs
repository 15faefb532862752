//! Comma-separated lists: array elements and object entries.
//!
//! Both lists share one loop. The only difference is whether a bare `,`
//! records an empty slot (`[, x]`) or is an error (`{, x}`).

use cm_ir::Span;
use tracing::trace;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

/// Whether a separator with no element before it is a valid empty slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blanks {
    Allowed,
    Forbidden,
}

/// Configuration for one delimited, comma-separated list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    pub open: char,
    pub separator: char,
    pub terminator: char,
    pub blanks: Blanks,
    /// Production reported on errors raised by the list itself.
    pub context: ErrorContext,
}

impl SeriesConfig {
    /// A comma-separated list between `open` and `terminator`.
    ///
    /// Blanks are forbidden until [`allow_blanks`](Self::allow_blanks).
    pub fn comma(open: char, terminator: char, context: ErrorContext) -> Self {
        SeriesConfig {
            open,
            separator: ',',
            terminator,
            blanks: Blanks::Forbidden,
            context,
        }
    }

    /// Elements of `[...]`.
    pub fn array() -> Self {
        Self::comma('[', ']', ErrorContext::Array).allow_blanks()
    }

    /// Entries of `{...}`.
    pub fn object() -> Self {
        Self::comma('{', '}', ErrorContext::Object)
    }

    #[must_use]
    pub fn allow_blanks(mut self) -> Self {
        self.blanks = Blanks::Allowed;
        self
    }

    /// The "expected ..." phrase for a missing separator or terminator.
    fn expected(&self) -> &'static str {
        match (self.separator, self.terminator) {
            (',', ']') => "`,` or `]`",
            (',', '}') => "`,` or `}`",
            (',', ')') => "`,` or `)`",
            _ => "a separator or the end of the list",
        }
    }
}

impl Parser<'_> {
    /// Parse a delimited list whose opening delimiter has already been
    /// consumed, up to and including the terminator.
    ///
    /// Empty slots come back as `None`; they only occur when the config
    /// allows blanks. A separator right before the terminator adds nothing,
    /// so `[x,]` has one element and `[,]` has one empty slot.
    pub fn series<T>(
        &mut self,
        config: &SeriesConfig,
        open_span: Span,
        mut element: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<Option<T>>, ParseError> {
        let mut items = Vec::new();

        loop {
            self.cursor.eat_whitespace();
            let Some(c) = self.cursor.current() else {
                return Err(self.unclosed(config, open_span));
            };
            if c == config.terminator {
                self.cursor.advance();
                break;
            }

            if c == config.separator {
                if config.blanks == Blanks::Forbidden {
                    return Err(self
                        .error(ParseErrorKind::BlankNotAllowed, self.cursor.current_span())
                        .in_context(config.context));
                }
                trace!(pos = self.cursor.pos(), "series blank");
                items.push(None);
            } else {
                trace!(pos = self.cursor.pos(), terminator = %config.terminator, "series element");
                items.push(Some(element(self)?));
            }

            self.cursor.eat_whitespace();
            match self.cursor.current() {
                None => return Err(self.unclosed(config, open_span)),
                Some(c) if c == config.terminator => {
                    self.cursor.advance();
                    break;
                }
                Some(c) if c == config.separator => self.cursor.advance(),
                Some(found) => {
                    return Err(self
                        .error(
                            ParseErrorKind::UnexpectedChar {
                                found,
                                expected: config.expected(),
                            },
                            self.cursor.current_span(),
                        )
                        .in_context(config.context));
                }
            }
        }

        Ok(items)
    }

    #[cold]
    fn unclosed(&self, config: &SeriesConfig, open_span: Span) -> ParseError {
        self.error(
            ParseErrorKind::Unclosed {
                open: config.open,
                close: config.terminator,
                open_span,
            },
            self.cursor.current_span(),
        )
        .in_context(config.context)
    }
}

#[cfg(test)]
mod tests;
