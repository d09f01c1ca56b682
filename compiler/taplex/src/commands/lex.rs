//! `lex`: tokenize a TAP file and display the token stream.

use std::io::Write;

use tap_lexer::{LexerConfig, TapLexer};

use super::{fail, read_source, CommandError};

/// Options for the `lex` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// `--trivia`: include whitespace and newline tokens.
    pub trivia: bool,
    /// `--json`: one JSON object per token.
    pub json: bool,
}

impl LexOptions {
    fn config(self) -> LexerConfig {
        LexerConfig {
            emit_trivia: self.trivia,
        }
    }
}

/// Parse the arguments following `lex`.
///
/// Returns the input path and options. Exactly one path is required.
pub fn parse_lex_args(args: &[String]) -> Result<(String, LexOptions), String> {
    let mut options = LexOptions::default();
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--trivia" => options.trivia = true,
            "--json" => options.json = true,
            "-" => path = Some(arg.clone()),
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            _ if path.is_some() => return Err(format!("unexpected argument '{arg}'")),
            _ => path = Some(arg.clone()),
        }
    }
    match path {
        Some(path) => Ok((path, options)),
        None => Err("missing file path".to_owned()),
    }
}

/// Stream the tokens of `source` to `out`.
///
/// Tokens scanned before a lexer error are written before the error is
/// returned. Returns the number of tokens written.
pub fn write_tokens(
    out: &mut impl Write,
    path: &str,
    source: &str,
    options: LexOptions,
) -> Result<usize, CommandError> {
    let mut lexer = TapLexer::with_config(source, options.config());
    if !options.json {
        writeln!(out, "Tokens for '{path}':")?;
    }
    let mut count = 0;
    for token in lexer.scan() {
        let token = token.map_err(|err| CommandError::lex(path, err))?;
        if options.json {
            serde_json::to_writer(&mut *out, &token)?;
            writeln!(out)?;
        } else {
            writeln!(
                out,
                "  {} {:?} @ {} [{}..={}]",
                token.kind, token.value, token.location, token.location.start, token.location.end
            )?;
        }
        count += 1;
    }
    Ok(count)
}

/// Write the token stream of `source` followed by the token count, then flush.
///
/// A failed write or flush takes precedence over a lexer error, since the
/// partial output could not be delivered.
pub fn lex_to(
    out: &mut impl Write,
    path: &str,
    source: &str,
    options: LexOptions,
) -> Result<usize, CommandError> {
    let result = write_tokens(out, path, source, options).and_then(|count| {
        if !options.json {
            writeln!(out, "({count} tokens)")?;
        }
        Ok(count)
    });
    out.flush()?;
    result
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, options: LexOptions) {
    let content = read_source(path).unwrap_or_else(|err| fail(&err));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match lex_to(&mut out, path, &content, options) {
        Ok(count) => tracing::debug!(path, count, "lexed file"),
        Err(err) => fail(&err),
    }
}
