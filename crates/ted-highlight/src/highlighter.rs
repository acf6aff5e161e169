//! The classification table — exact token text to style lookup.
//!
//! A [`Highlighter`] holds one theme's bindings from literal token
//! strings to [`TokenStyle`] values, plus the character-level split
//! predicate the view layer uses to carve a line into tokens.
//!
//! Lookup is exact-string, not pattern-based: a theme enumerates every
//! literal it wants colored (`"if"`, `"=="`, `"<<<"`). That trades
//! recall — an identifier spelled like a keyword is still colored, and
//! multi-character operators must be listed in full — for O(1) lookup
//! and zero ambiguity.

use std::collections::HashMap;

use crate::style::TokenStyle;
use crate::theme::Theme;

/// Characters that always terminate the current token and become their
/// own one-character token.
///
/// Fixed punctuation set; everything else (letters, digits, whitespace,
/// any other Unicode) accumulates into the current token. Named so the
/// split contract is testable independently of any theme's contents.
pub const SPLIT_CHARS: &str = r#"'"\<>{}[]!@#$%^&*();:.,-+/?"#;

/// Token-to-style classification table for one theme.
///
/// Built once at startup, read-only afterwards. All queries take
/// `&self`; to switch themes at runtime, build a new table and swap the
/// whole value (the table is `Clone`, and cheap at theme sizes).
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    /// The theme's bindings. A token maps to at most one style; later
    /// registrations overwrite earlier ones for the same text.
    styles: HashMap<String, TokenStyle>,
}

impl Highlighter {
    /// Create an empty table. Every lookup misses until a theme is
    /// applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table populated with one theme.
    #[must_use]
    pub fn with_theme(theme: &Theme) -> Self {
        let mut hl = Self::new();
        theme.apply(&mut hl);
        hl
    }

    /// Whether `ch` should split a token.
    ///
    /// True iff `ch` is in [`SPLIT_CHARS`]. Total over all of `char`;
    /// the caller handles other boundaries (whitespace) itself.
    #[inline]
    #[must_use]
    pub fn is_split_char(ch: char) -> bool {
        SPLIT_CHARS.contains(ch)
    }

    /// Look up the style bound to an exact token text.
    ///
    /// Case-sensitive; returns `None` for anything no theme registered.
    /// A miss is the normal outcome for identifiers, literals, and
    /// whitespace — the caller falls back to its default style.
    #[must_use]
    pub fn style(&self, token: &str) -> Option<TokenStyle> {
        self.styles.get(token).copied()
    }

    /// Bind or rebind one token text to one style. Last write wins.
    ///
    /// No validation: the empty string is legal (no scanner ever
    /// produces it, so the binding is simply never hit).
    pub fn set_style(&mut self, token: impl Into<String>, style: TokenStyle) {
        self.styles.insert(token.into(), style);
    }

    /// Number of distinct token texts currently bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no tokens are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
