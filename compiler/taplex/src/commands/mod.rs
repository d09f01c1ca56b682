//! Command handlers for the `taplex` CLI.
//!
//! Each submodule implements one command. Shared pieces (reading input,
//! the command error type) live in the module root.

use std::io::Read;

use tap_lexer::LexError;
use thiserror::Error;

mod check;
mod lex;

pub use check::{check_file, check_source, CheckSummary};
pub use lex::{lex_file, lex_to, parse_lex_args, write_tokens, LexOptions};

/// Failure of a `taplex` command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Lex {
        path: String,
        line: usize,
        column: usize,
        #[source]
        source: LexError,
    },
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to encode token as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Attach the input path to a lexer error.
    pub fn lex(path: &str, source: LexError) -> Self {
        CommandError::Lex {
            path: path.to_owned(),
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// Read a TAP file, or standard input when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, CommandError> {
    let result = if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CommandError::NotFound(path.to_owned()),
        std::io::ErrorKind::PermissionDenied => CommandError::PermissionDenied(path.to_owned()),
        std::io::ErrorKind::InvalidData => CommandError::InvalidUtf8(path.to_owned()),
        _ => CommandError::Read {
            path: path.to_owned(),
            source: e,
        },
    })
}

/// Print `err` and exit with status 1.
pub(crate) fn fail(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
