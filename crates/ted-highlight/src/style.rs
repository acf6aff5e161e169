//! Token styles — the resolved look of one classified token.

use ted_cell::{Attr, CellColor};

/// A resolved style for one token of source text.
///
/// Pre-resolved to terminal-ready values — the view layer just reads
/// the fields and writes cells. Many token strings share one
/// `TokenStyle` value (coloring is per category, not per token), so
/// the type is small and `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStyle {
    pub fg: CellColor,
    pub bg: CellColor,
    pub attrs: Attr,
}

impl TokenStyle {
    /// Create a style with all fields.
    #[must_use]
    pub const fn new(fg: CellColor, bg: CellColor, attrs: Attr) -> Self {
        Self { fg, bg, attrs }
    }

    /// Create a style with just a foreground color.
    #[must_use]
    pub const fn fg_only(fg: CellColor) -> Self {
        Self {
            fg,
            bg: CellColor::Default,
            attrs: Attr::empty(),
        }
    }

    /// Create a style with foreground and background.
    #[must_use]
    pub const fn fg_bg(fg: CellColor, bg: CellColor) -> Self {
        Self {
            fg,
            bg,
            attrs: Attr::empty(),
        }
    }
}

impl Default for TokenStyle {
    fn default() -> Self {
        Self {
            fg: CellColor::Default,
            bg: CellColor::Default,
            attrs: Attr::empty(),
        }
    }
}
