//! Fatal stream errors.

use thiserror::Error;

/// A fatal error raised while reading an [`InputStream`](crate::InputStream).
///
/// Carries the message, the text of the offending token, and the stream's
/// position when the error was built. There is no recovery: whoever receives
/// a `StreamError` must abandon the lexing session.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{message}, got {found:?} (line {line}, column {column}, position {position})")]
pub struct StreamError {
    /// What went wrong.
    pub message: String,
    /// Text of the token being processed when the error was raised.
    pub found: String,
    /// 1-based line of the stream cursor.
    pub line: usize,
    /// 0-based column of the stream cursor.
    pub column: usize,
    /// Byte offset of the stream cursor.
    pub position: usize,
}
