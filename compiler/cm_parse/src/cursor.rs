//! Character cursor over pattern text.
//!
//! Pattern strings are short and parsed once, so the cursor works on `char`s
//! directly instead of a token stream. Positions are byte offsets into the
//! source, which is what [`Span`] records.

use cm_ir::Span;

/// Cursor over a pattern string.
///
/// The cursor is [`Copy`], so a production can remember where it started
/// by copying the position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The whole source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// Move past the current character. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume `expected` if it is the current character.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds, returning the consumed text.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.slice_from(start)
    }

    /// Skip Unicode whitespace.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Source text from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    /// Span from `start` up to the current position.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(to_offset(start), to_offset(self.pos))
    }

    /// Span from the current position to the end of input.
    pub fn rest_span(&self) -> Span {
        Span::new(to_offset(self.pos), to_offset(self.source.len()))
    }

    /// Span of the current character (empty at end of input).
    pub fn current_span(&self) -> Span {
        match self.current() {
            Some(c) => Span::new(to_offset(self.pos), to_offset(self.pos + c.len_utf8())),
            None => Span::point(to_offset(self.pos)),
        }
    }
}

/// Byte offset as a span bound. Offsets past `u32::MAX` saturate.
fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
