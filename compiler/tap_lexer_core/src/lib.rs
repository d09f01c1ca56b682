//! Low-level input cursor for the TAP lexer.
//!
//! This crate is standalone: it knows nothing about TAP tokens. It provides
//! [`InputStream`], a character cursor over in-memory text that tracks byte
//! position, line and column, and [`StreamError`], the fatal error every
//! scanning failure is reported as.
//!
//! The token layer (`tap_lexer`) drives the stream and snapshots positions
//! with [`Mark`] before scanning each token.

mod error;
mod input_stream;

pub use error::StreamError;
pub use input_stream::{is_newline, is_whitespace, InputStream, Mark};
