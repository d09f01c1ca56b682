//! Lexer errors.
//!
//! Every error is fatal. The token stream ends at the first one and nothing
//! is resynchronised.

use tap_lexer_core::StreamError;
use thiserror::Error;

/// A fatal error from [`TapLexer`](crate::TapLexer).
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    /// A character outside every token class.
    #[error("Unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        found: char,
        line: usize,
        column: usize,
        position: usize,
    },
    /// An error raised through the input stream.
    #[error(transparent)]
    Syntax(#[from] StreamError),
}

impl LexError {
    /// 1-based line of the error.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
            LexError::Syntax(err) => err.line,
        }
    }

    /// 0-based column of the error.
    pub fn column(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { column, .. } => *column,
            LexError::Syntax(err) => err.column,
        }
    }

    /// Byte offset of the error.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. } => *position,
            LexError::Syntax(err) => err.position,
        }
    }
}

#[cfg(test)]
mod tests;
