//! `check`: verify that a TAP file tokenizes cleanly.

use tap_lexer::{tokenize, LexError, TokenKind};

use super::{fail, read_source, CommandError};

/// Token counts for a file that tokenized without errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub tokens: usize,
    pub passed: usize,
    pub failed: usize,
    pub bailed_out: bool,
}

/// Tokenize `source` and count test points.
pub fn check_source(source: &str) -> Result<CheckSummary, LexError> {
    let tokens = tokenize(source)?;
    let mut summary = CheckSummary {
        tokens: tokens.len(),
        ..CheckSummary::default()
    };
    for token in &tokens {
        match token.kind {
            TokenKind::TestOkLiteral => summary.passed += 1,
            TokenKind::TestNotOkLiteral => summary.failed += 1,
            TokenKind::TestBailoutLiteral => summary.bailed_out = true,
            _ => {}
        }
    }
    Ok(summary)
}

/// Check a file and report the result.
pub fn check_file(path: &str) {
    let content = read_source(path).unwrap_or_else(|err| fail(&err));
    match check_source(&content) {
        Ok(summary) => {
            println!(
                "'{path}': {} tokens, {} ok, {} not ok{}",
                summary.tokens,
                summary.passed,
                summary.failed,
                if summary.bailed_out { ", bailed out" } else { "" }
            );
        }
        Err(err) => fail(&CommandError::lex(path, err)),
    }
}
