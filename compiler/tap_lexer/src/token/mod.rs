//! Scanned tokens and their source locations.
//!
//! A [`Token`] is a snapshot: its location is computed from the [`Mark`]
//! taken where its value begins, not from wherever the stream cursor happens
//! to be when the token is built.

use std::fmt;
use std::ops::Range;

use tap_lexer_core::Mark;

use crate::TokenKind;

/// Where a token's value sits in the source.
///
/// `start` and `end` are zero-based byte offsets of the first and last byte
/// of the value (`end` is inclusive). For an empty value `end == start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// 1-based line.
    pub line: usize,
    /// 0-based character column of the value's first character.
    pub column: usize,
    pub start: usize,
    pub end: usize,
}

impl Location {
    /// Location of `value` when it begins at `at`.
    pub fn new(at: Mark, value: &str) -> Self {
        Location {
            line: at.line,
            column: at.column,
            start: at.pos,
            end: at.pos + value.len().saturating_sub(1),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A classified span of TAP text.
///
/// `value` borrows from the source text. For comments and descriptions it is
/// the cleaned text (marker stripped), so it can be shorter than the
/// characters the lexer consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TokenKind,
    pub value: &'a str,
    pub location: Location,
}

impl<'a> Token<'a> {
    /// Build a token whose value begins at `at`.
    pub fn new(kind: TokenKind, value: &'a str, at: Mark) -> Self {
        Token {
            kind,
            value,
            location: Location::new(at, value),
        }
    }

    /// Half-open byte range of the value in the source.
    pub fn span(&self) -> Range<usize> {
        self.location.start..self.location.start + self.value.len()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {}", self.kind, self.value, self.location)
    }
}
