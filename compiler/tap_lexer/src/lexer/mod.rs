//! Single-pass TAP tokenizer.
//!
//! [`TapLexer`] owns one [`InputStream`] and turns it into a lazy,
//! forward-only sequence of [`Token`]s. Each call classifies the next
//! character and hands off to a scan routine that consumes the whole token:
//!
//! | First character      | Routine            | Kind                     |
//! |----------------------|--------------------|--------------------------|
//! | end of input         | -                  | `Eof`                    |
//! | `0`-`9`              | `scan_numeric`     | `Numeric`                |
//! | `a`-`z`, `A`-`Z`, `.`| `scan_literal`     | `Literal` or a keyword   |
//! | `#`                  | `scan_comment`     | `Comment`                |
//! | `-`                  | `scan_description` | `Comment`                |
//! | space, tab           | skipped            | `Whitespace` with trivia |
//! | `\n`, `\r`           | skipped            | `Newline` with trivia    |
//! | anything else        | -                  | fatal error              |
//!
//! A description requires its leading `-`. Text after a test number without
//! a dash scans as a literal.

use std::iter::FusedIterator;

use tap_lexer_core::{is_newline, is_whitespace, InputStream, Mark};

use crate::keywords::{classify, Keyword, KeywordMatch};
use crate::{LexError, LexerConfig, Token, TokenKind};

/// Characters a literal is made of.
#[inline]
fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '.' || is_whitespace(c)
}

/// TAP tokenizer over one input text.
///
/// A lexer is a single forward pass: once its token sequence has ended
/// (with `Eof` or an error) it yields nothing more and cannot be rewound.
#[derive(Debug)]
pub struct TapLexer<'a> {
    stream: InputStream<'a>,
    config: LexerConfig,
    /// Last token handed out, for error context.
    current_token: Option<Token<'a>>,
    exhausted: bool,
}

impl<'a> TapLexer<'a> {
    /// Create a lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Create a lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        tracing::trace!(len = source.len(), ?config, "creating TAP lexer");
        TapLexer {
            stream: InputStream::new(source),
            config,
            current_token: None,
            exhausted: false,
        }
    }

    /// Lazily scan the remaining tokens.
    ///
    /// The sequence ends after the `Eof` token or after the first error.
    /// Calling `scan` again on an exhausted lexer yields an empty sequence.
    pub fn scan(&mut self) -> Tokens<'_, 'a> {
        Tokens { lexer: self }
    }

    /// Same sequence as [`scan`](Self::scan).
    pub fn scan_all(&mut self) -> Tokens<'_, 'a> {
        self.scan()
    }

    /// Consume one raw character from the underlying stream.
    pub fn next_char(&mut self) -> Option<char> {
        self.stream.next()
    }

    /// Returns `true` once the underlying stream is fully consumed.
    pub fn eof(&self) -> bool {
        self.stream.eof()
    }

    /// Returns `true` once the token sequence has ended.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The last token yielded, if any.
    pub fn current_token(&self) -> Option<&Token<'a>> {
        self.current_token.as_ref()
    }

    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Build a fatal error at the current position.
    ///
    /// The current token's value is attached as the offending text.
    pub fn error(&self, message: impl Into<String>) -> LexError {
        let found = self.current_token.map_or("", |token| token.value);
        LexError::Syntax(self.stream.error(message, found))
    }

    fn next_token(&mut self) -> Option<Result<Token<'a>, LexError>> {
        if self.exhausted {
            return None;
        }
        match self.scan_token() {
            Ok(token) => {
                tracing::trace!(
                    kind = %token.kind,
                    value = token.value,
                    line = token.location.line,
                    column = token.location.column,
                    "scanned token"
                );
                self.current_token = Some(token);
                self.exhausted = token.kind == TokenKind::Eof;
                Some(Ok(token))
            }
            Err(err) => {
                tracing::debug!(%err, "lexing aborted");
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }

    /// Classify the next character and scan one token.
    ///
    /// Whitespace and line breaks are skipped in a loop unless the
    /// configuration asks for trivia tokens.
    fn scan_token(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            let start = self.stream.mark();
            let Some(c) = self.stream.current() else {
                return Ok(Token::new(TokenKind::Eof, "", start));
            };
            match c {
                '0'..='9' => return Ok(self.scan_numeric(start)),
                'a'..='z' | 'A'..='Z' | '.' => return Ok(self.scan_literal(start)),
                '#' => return Ok(self.scan_comment(start)),
                '-' => return Ok(self.scan_description(start)),
                ' ' | '\t' => {
                    self.stream.eat_while(is_whitespace);
                    if self.config.emit_trivia {
                        let value = self.stream.slice_from(start);
                        return Ok(Token::new(TokenKind::Whitespace, value, start));
                    }
                }
                '\n' | '\r' => {
                    self.stream.next();
                    if c == '\r' && self.stream.current() == Some('\n') {
                        self.stream.next();
                    }
                    if self.config.emit_trivia {
                        let value = self.stream.slice_from(start);
                        return Ok(Token::new(TokenKind::Newline, value, start));
                    }
                }
                _ => {
                    return Err(LexError::UnexpectedCharacter {
                        found: c,
                        line: start.line,
                        column: start.column,
                        position: start.pos,
                    })
                }
            }
        }
    }

    fn scan_numeric(&mut self, start: Mark) -> Token<'a> {
        self.stream.eat_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Numeric, self.stream.slice_from(start), start)
    }

    /// Scan letters, dots and whitespace, then resolve keywords.
    ///
    /// Words separated by spaces merge into one literal, which is how
    /// `not ok` and `TAP version` are recognised.
    fn scan_literal(&mut self, start: Mark) -> Token<'a> {
        self.stream.eat_while(is_literal_char);
        let mut raw = self.stream.slice_from(start);
        if self.stream.current() == Some('!')
            && !raw.ends_with(is_whitespace)
            && Keyword::completed_by_bang(raw)
        {
            self.stream.next();
            raw = self.stream.slice_from(start);
        }

        // A literal starts with a letter or `.`, so trimming only moves the end.
        let value = raw.trim();
        match Keyword::lookup(value) {
            Some(keyword) => scan_tap_keyword(keyword, value, start),
            None => Token::new(TokenKind::Literal, value, start),
        }
    }

    /// `#` up to the end of the line, minus a leading `"# "`.
    fn scan_comment(&mut self, start: Mark) -> Token<'a> {
        self.stream.eat_until_newline_or_eof();
        let raw = self.stream.slice_from(start);
        let (value, at) = strip_marker(raw, "# ", start);
        Token::new(TokenKind::Comment, value, at)
    }

    /// `-` up to a line break or `#`, minus a leading `"- "`, trimmed.
    fn scan_description(&mut self, start: Mark) -> Token<'a> {
        self.stream.eat_while(|c| !is_newline(c) && c != '#');
        let raw = self.stream.slice_from(start);
        let (stripped, at) = strip_marker(raw, "- ", start);
        let (value, at) = trim_with_mark(stripped, at);
        Token::new(TokenKind::Comment, value, at)
    }
}

/// Turn a keyword candidate into its token.
fn scan_tap_keyword(keyword: Keyword, value: &str, at: Mark) -> Token<'_> {
    match classify(keyword) {
        KeywordMatch::Mapped(kind) => Token::new(kind, value, at),
        KeywordMatch::Unmapped(keyword) => {
            tracing::debug!(
                keyword = keyword.text(),
                line = at.line,
                column = at.column,
                "keyword has no dedicated token kind"
            );
            Token::new(TokenKind::Keyword, value, at)
        }
    }
}

fn strip_marker<'a>(raw: &'a str, marker: &str, at: Mark) -> (&'a str, Mark) {
    match raw.strip_prefix(marker) {
        Some(rest) => (rest, at.advanced_by(marker)),
        None => (raw, at),
    }
}

fn trim_with_mark(text: &str, at: Mark) -> (&str, Mark) {
    let rest = text.trim_start();
    let skipped = &text[..text.len() - rest.len()];
    (rest.trim_end(), at.advanced_by(skipped))
}

/// Lazy token sequence produced by [`TapLexer::scan`].
///
/// Yields `Ok` tokens up to and including `Eof`, or `Err` once and then
/// stops.
#[derive(Debug)]
pub struct Tokens<'l, 'a> {
    lexer: &'l mut TapLexer<'a>,
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next_token()
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Scan a whole input with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    tokenize_with(source, LexerConfig::default())
}

/// Scan a whole input with an explicit configuration.
pub fn tokenize_with(source: &str, config: LexerConfig) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = TapLexer::with_config(source, config);
    lexer.scan_all().collect()
}
