// SPDX-License-Identifier: MIT
//
// Terminal color values.
//
// A `CellColor` is what actually gets written into a cell: either a
// 24-bit RGB triple, an index into the terminal's 256-color palette, or
// the terminal's own default. ANSI indices are preferred by the builtin
// themes — they adapt to the user's terminal palette instead of forcing
// a specific look.

use std::fmt;

/// A terminal-ready color for one cell.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CellColor {
    /// 24-bit `TrueColor` (the standard for modern terminals).
    Rgb(u8, u8, u8),

    /// ANSI 256-color palette index. Indices 0-15 are the classic
    /// terminal colors (black, red, green, yellow, blue, magenta,
    /// cyan, white, then their bright variants).
    Ansi256(u8),

    /// Terminal default color (inherits from terminal settings).
    #[default]
    Default,
}

impl CellColor {
    /// Whether this is the terminal default color.
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Ansi256(idx) => write!(f, "ansi({idx})"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_default() {
        assert!(CellColor::Default.is_default());
        assert_eq!(CellColor::default(), CellColor::Default);
    }

    #[test]
    fn rgb_is_not_default() {
        assert!(!CellColor::Rgb(0, 0, 0).is_default());
    }

    #[test]
    fn ansi_is_not_default() {
        assert!(!CellColor::Ansi256(4).is_default());
    }

    #[test]
    fn cell_color_is_4_bytes() {
        assert_eq!(std::mem::size_of::<CellColor>(), 4);
    }

    #[test]
    fn debug_formats() {
        assert_eq!(format!("{:?}", CellColor::Rgb(255, 0, 16)), "#ff0010");
        assert_eq!(format!("{:?}", CellColor::Ansi256(7)), "ansi(7)");
        assert_eq!(format!("{:?}", CellColor::Default), "default");
    }
}
