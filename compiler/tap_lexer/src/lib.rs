//! Lexer for the Test Anything Protocol (TAP).
//!
//! Turns TAP text into a lazy sequence of typed tokens:
//!
//! ```
//! use tap_lexer::{TapLexer, TokenKind};
//!
//! let mut lexer = TapLexer::new("TAP version 14\nok 1 - first\n1..1\n");
//! let kinds: Vec<TokenKind> = lexer
//!     .scan()
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap_or_default();
//! assert_eq!(kinds.first(), Some(&TokenKind::VersionLiteral));
//! assert_eq!(kinds.last(), Some(&TokenKind::Eof));
//! ```
//!
//! Scanning is fail-fast: the first character outside every token class
//! ends the sequence with a [`LexError`].

mod config;
mod keywords;
mod lex_error;
mod lexer;
mod tag;
mod token;

pub use config::LexerConfig;
pub use keywords::{classify, Keyword, KeywordMatch, KEYWORDS};
pub use lex_error::LexError;
pub use lexer::{tokenize, tokenize_with, TapLexer, Tokens};
pub use tag::TokenKind;
pub use tap_lexer_core::{InputStream, Mark, StreamError};
pub use token::{Location, Token};
