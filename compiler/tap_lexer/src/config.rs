//! Lexer configuration.

/// Options for a [`TapLexer`](crate::TapLexer) session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Emit `Whitespace` and `Newline` tokens instead of skipping them.
    ///
    /// Off by default: spaces, tabs and line breaks between tokens are
    /// consumed silently.
    pub emit_trivia: bool,
}

impl LexerConfig {
    /// Configuration that emits trivia tokens.
    pub const fn with_trivia() -> Self {
        LexerConfig { emit_trivia: true }
    }
}
