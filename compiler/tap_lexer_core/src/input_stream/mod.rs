//! Line/column tracking cursor over in-memory TAP text.
//!
//! The stream walks the input one `char` at a time. `pos` is a byte offset
//! into the source, `line` is 1-based and `column` counts characters from
//! the start of the current line (0-based).
//!
//! # Line Breaks
//!
//! `\n` ends a line. A `\r` ends a line only when it is not immediately
//! followed by `\n`, so `\r\n` counts once.

use crate::StreamError;

/// Returns `true` for horizontal whitespace (space or tab).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Returns `true` for `\n` and `\r`.
#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Snapshot of a stream position.
///
/// Taken with [`InputStream::mark`] before a token is scanned, so the token's
/// location never depends on how far the cursor moved afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mark {
    /// Byte offset into the source.
    pub pos: usize,
    /// 1-based line number.
    pub line: usize,
    /// 0-based character column.
    pub column: usize,
}

impl Mark {
    /// The position at the very start of any input.
    pub const START: Mark = Mark {
        pos: 0,
        line: 1,
        column: 0,
    };

    /// Move the mark forward across `text`.
    ///
    /// `text` must not contain a line break; the line stays the same.
    #[must_use]
    pub fn advanced_by(self, text: &str) -> Mark {
        debug_assert!(
            !text.contains(is_newline),
            "mark cannot be advanced across a line break"
        );
        Mark {
            pos: self.pos + text.len(),
            line: self.line,
            column: self.column + text.chars().count(),
        }
    }
}

/// Forward-only cursor over the full input text.
///
/// Created once per lexing session. [`Iterator::next`] consumes one
/// character and updates the position, line and column together, so the
/// three always describe the same point in the source.
#[derive(Clone, Debug)]
pub struct InputStream<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> InputStream<'a> {
    /// Create a stream positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: Mark::START.pos,
            line: Mark::START.line,
            column: Mark::START.column,
        }
    }

    /// The unconsumed remainder of the source.
    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns the character `offset` places ahead of the cursor.
    ///
    /// `peek(0)` is the next character `next()` would return. Returns `None`
    /// past the end of the input; never panics.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// Returns the character under the cursor (`peek(0)`).
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current 0-based column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The complete input text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Snapshot the current position.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Source text between `mark` and the cursor.
    ///
    /// `mark` must have been taken from this stream.
    pub fn slice_from(&self, mark: Mark) -> &'a str {
        debug_assert!(mark.pos <= self.pos, "mark {mark:?} is ahead of the cursor");
        &self.source[mark.pos..self.pos]
    }

    /// Consume characters while `pred` holds for the next one.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.current().is_some_and(&pred) {
            self.next();
        }
    }

    /// Advance to the next `\n`/`\r` or to the end of input.
    ///
    /// The line break itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        // Both needles are ASCII, so `len` is a char boundary.
        self.column += rest[..len].chars().count();
        self.pos += len;
    }

    /// Build the fatal error for this stream's current position.
    ///
    /// `found` is the text of the token that was being processed.
    pub fn error(&self, message: impl Into<String>, found: &str) -> StreamError {
        StreamError {
            message: message.into(),
            found: found.to_owned(),
            line: self.line,
            column: self.column,
            position: self.pos,
        }
    }
}

impl Iterator for InputStream<'_> {
    type Item = char;

    /// Consume one character, updating line and column.
    fn next(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 0;
            }
            '\r' if self.current() != Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
        Some(c)
    }
}
