//! Token kinds.

use std::fmt;

/// Classification of a scanned TAP token.
///
/// The set is fixed. `TestSkipLiteral` and `TestTodoLiteral` exist for
/// consumers but are not currently produced by the lexer: `skip` and `todo`
/// scan as [`TokenKind::Keyword`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// End of input. Always the last token of a successful scan.
    #[cfg_attr(feature = "serde", serde(rename = "EOF"))]
    Eof,
    /// Run of ASCII digits.
    Numeric,
    /// Bare words, dots and embedded whitespace that are not a keyword.
    Literal,
    /// A keyword candidate without a dedicated kind (`skip`, `todo`, `...`).
    Keyword,
    /// Run of spaces and tabs (only with `emit_trivia`).
    Whitespace,
    /// `#` comment or `-` description text.
    Comment,
    /// Line break (only with `emit_trivia`).
    Newline,
    /// `TAP version`
    VersionLiteral,
    /// `..` in a plan line.
    PlanLiteral,
    /// `ok`
    TestOkLiteral,
    /// `not ok`
    TestNotOkLiteral,
    /// Reserved for `skip` directives; not produced by the lexer.
    TestSkipLiteral,
    /// Reserved for `todo` directives; not produced by the lexer.
    TestTodoLiteral,
    /// `Bail out!`
    TestBailoutLiteral,
}

impl TokenKind {
    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Numeric => "Numeric",
            TokenKind::Literal => "Literal",
            TokenKind::Keyword => "Keyword",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Comment => "Comment",
            TokenKind::Newline => "Newline",
            TokenKind::VersionLiteral => "VersionLiteral",
            TokenKind::PlanLiteral => "PlanLiteral",
            TokenKind::TestOkLiteral => "TestOkLiteral",
            TokenKind::TestNotOkLiteral => "TestNotOkLiteral",
            TokenKind::TestSkipLiteral => "TestSkipLiteral",
            TokenKind::TestTodoLiteral => "TestTodoLiteral",
            TokenKind::TestBailoutLiteral => "TestBailoutLiteral",
        }
    }

    /// Returns `true` for whitespace and line breaks.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
