//! TAP keyword set and keyword classification.
//!
//! Keyword resolution happens in two steps:
//! 1. **Membership**: [`Keyword::lookup`] decides whether a trimmed literal is
//!    one of the ten TAP keywords.
//! 2. **Classification**: [`classify`] maps a keyword to its dedicated
//!    [`TokenKind`]. Five keywords have one; the other five (`skip`, `todo`,
//!    `#`, `---`, `...`) are keyword candidates without a mapping and come
//!    back as [`KeywordMatch::Unmapped`].
//!
//! Unmapped keywords are never folded into `Literal` and never given a
//! `TestSkipLiteral`/`TestTodoLiteral` kind.

use crate::TokenKind;

/// A member of the TAP keyword set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Ok,
    NotOk,
    Hash,
    TapVersion,
    /// `...` (YAML block end)
    YamlEnd,
    /// `---` (YAML block start)
    YamlStart,
    /// `..` (plan separator)
    Plan,
    Skip,
    Todo,
    BailOut,
}

/// Every keyword, in declaration order.
pub const KEYWORDS: [Keyword; 10] = [
    Keyword::Ok,
    Keyword::NotOk,
    Keyword::Hash,
    Keyword::TapVersion,
    Keyword::YamlEnd,
    Keyword::YamlStart,
    Keyword::Plan,
    Keyword::Skip,
    Keyword::Todo,
    Keyword::BailOut,
];

impl Keyword {
    /// Source text of the keyword.
    pub const fn text(self) -> &'static str {
        match self {
            Keyword::Ok => "ok",
            Keyword::NotOk => "not ok",
            Keyword::Hash => "#",
            Keyword::TapVersion => "TAP version",
            Keyword::YamlEnd => "...",
            Keyword::YamlStart => "---",
            Keyword::Plan => "..",
            Keyword::Skip => "skip",
            Keyword::Todo => "todo",
            Keyword::BailOut => "Bail out!",
        }
    }

    /// Look up a keyword by its exact text.
    ///
    /// Matching is case-sensitive and exact: `"ok "` or `"OK"` are not
    /// keywords.
    #[inline]
    pub fn lookup(text: &str) -> Option<Keyword> {
        match text {
            "ok" => Some(Keyword::Ok),
            "not ok" => Some(Keyword::NotOk),
            "#" => Some(Keyword::Hash),
            "TAP version" => Some(Keyword::TapVersion),
            "..." => Some(Keyword::YamlEnd),
            "---" => Some(Keyword::YamlStart),
            ".." => Some(Keyword::Plan),
            "skip" => Some(Keyword::Skip),
            "todo" => Some(Keyword::Todo),
            "Bail out!" => Some(Keyword::BailOut),
            _ => None,
        }
    }

    /// Returns `true` if `text` followed by `!` is a keyword.
    ///
    /// Literal scanning stops at `!`, so this is how `Bail out!` is completed.
    pub fn completed_by_bang(text: &str) -> bool {
        KEYWORDS
            .iter()
            .any(|kw| kw.text().strip_suffix('!') == Some(text))
    }
}

/// Outcome of classifying a keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordMatch {
    /// The keyword has a dedicated token kind.
    Mapped(TokenKind),
    /// The keyword is in the set but has no dedicated token kind.
    Unmapped(Keyword),
}

/// Map a keyword to its token kind.
pub fn classify(keyword: Keyword) -> KeywordMatch {
    match keyword {
        Keyword::TapVersion => KeywordMatch::Mapped(TokenKind::VersionLiteral),
        Keyword::Plan => KeywordMatch::Mapped(TokenKind::PlanLiteral),
        Keyword::Ok => KeywordMatch::Mapped(TokenKind::TestOkLiteral),
        Keyword::NotOk => KeywordMatch::Mapped(TokenKind::TestNotOkLiteral),
        Keyword::BailOut => KeywordMatch::Mapped(TokenKind::TestBailoutLiteral),
        Keyword::Hash
        | Keyword::YamlEnd
        | Keyword::YamlStart
        | Keyword::Skip
        | Keyword::Todo => KeywordMatch::Unmapped(keyword),
    }
}
