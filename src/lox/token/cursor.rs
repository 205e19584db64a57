//! Character-wise reader over Lox source text.

use crate::lox::types::Location;

/// Positional access to the source text with one and two characters of
/// lookahead. The cursor only ever moves forward.
#[derive(Debug, Clone)]
pub struct SourceCursor<'src> {
    /// The complete source text.
    source: &'src str,
    /// Byte offset of the current character.
    offset: usize,
    /// Line and column of the current character.
    location: Location,
}

impl<'src> SourceCursor<'src> {
    /// Places a new cursor on the first character of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        SourceCursor {
            source,
            offset: 0,
            location: Location::START,
        }
    }

    /// The not yet consumed part of the source.
    fn rest(&self) -> &'src str {
        self.source.get(self.offset..).unwrap_or_default()
    }

    /// The current character, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one, without consuming anything.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Whether the whole source has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Consumes and returns the current character. A consumed newline moves
    /// the location to the start of the next line.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "offsets are bounded by the source length, lines and columns by the offset."
    )]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.location.line += 1;
            self.location.col = 1;
        } else {
            self.location.col += 1;
        }
        Some(c)
    }

    /// Consumes the current character only if it satisfies `test`.
    pub fn advance_if<F: FnOnce(char) -> bool>(&mut self, test: F) -> Option<char> {
        match self.peek() {
            Some(c) if test(c) => self.advance(),
            _ => None,
        }
    }

    /// Consumes the longest run of characters satisfying `test` and
    /// returns how many were consumed.
    pub fn advance_while<F: Fn(char) -> bool>(&mut self, test: F) -> usize {
        let mut consumed = 0usize;
        while self.advance_if(&test).is_some() {
            consumed = consumed.saturating_add(1);
        }
        consumed
    }

    /// Consumes the current character only if it is exactly `expected`.
    /// Otherwise the cursor stays where it is.
    pub fn match_char(&mut self, expected: char) -> bool {
        self.advance_if(|c| c == expected).is_some()
    }

    /// Byte offset of the current character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Line and column of the current character.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// The current line, 1-indexed.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.location.line
    }

    /// The source text from byte offset `start` up to the current character.
    /// `start` must be an offset previously returned by [`Self::offset`].
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.source.get(start..self.offset).unwrap_or_default()
    }
}
