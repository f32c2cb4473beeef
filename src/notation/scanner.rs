//! Character cursor for the chord notation.
//!
//! The grammar is tokenized by direct character inspection, so instead of a
//! token stream the parser drives this cursor. Every symbol of the grammar is
//! ASCII; the cursor only ever advances over ASCII bytes and therefore always
//! sits on a `char` boundary.

use crate::error::ChordError;

/// A position in the input, as a byte index.
pub type Mark = usize;

/// Cursor over the song text.
pub struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Current position, to be handed back to [`Scanner::restore`].
    pub fn mark(&self) -> Mark {
        self.pos
    }

    /// Rewind to a saved position.
    pub fn restore(&mut self, mark: Mark) {
        self.pos = mark;
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Byte at the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Byte `n` positions past the cursor.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    /// The full character at the cursor, for diagnostics.
    pub fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consume one ASCII byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        debug_assert!(b.is_ascii());
        self.pos += 1;
        Some(b)
    }

    /// Consume `expected` if it is next.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `keyword` if the input continues with it.
    pub fn eat_str(&mut self, keyword: &str) -> bool {
        if self.bytes[self.pos..].starts_with(keyword.as_bytes()) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    /// Skip spaces, tabs and newlines.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Consume a run of ASCII digits.
    pub fn read_digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos > start {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    /// Text between a saved position and the cursor.
    pub fn slice_from(&self, start: Mark) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Character offset of a byte position.
    ///
    /// Marks are only taken where the cursor has been, and the cursor never
    /// steps over a non-ASCII byte, so everything before a mark is ASCII and
    /// the byte index is already the character count.
    pub fn char_offset(&self, mark: Mark) -> usize {
        mark
    }

    /// Grammar violation at a saved position.
    pub fn error_at(&self, mark: Mark, message: impl Into<String>) -> ChordError {
        ChordError::grammar(self.char_offset(mark), message)
    }

    /// Grammar violation at the cursor, naming what was found there.
    pub fn unexpected(&self, expected: &str) -> ChordError {
        let found = match self.peek_char() {
            Some(c) => format!("'{}'", c.escape_default()),
            None => "end of input".to_string(),
        };
        self.error_at(self.pos, format!("expected {}, found {}", expected, found))
    }
}
