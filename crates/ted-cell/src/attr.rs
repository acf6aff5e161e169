// SPDX-License-Identifier: MIT
//
// Text attributes stored as a compact bitfield.

bitflags::bitflags! {
    /// Text attributes for one cell.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters
    /// in the ANSI escape sequence standard. Combine with bitwise OR:
    ///
    /// ```
    /// use ted_cell::Attr;
    ///
    /// let style = Attr::BOLD | Attr::ITALIC;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::INVERSE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD    = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM     = 1 << 1;
        /// SGR 3 — italic or oblique.
        const ITALIC  = 1 << 2;
        /// SGR 7 — swap foreground and background.
        const INVERSE = 1 << 3;
    }
}

impl Attr {
    /// Whether no attributes are set.
    #[inline]
    #[must_use]
    pub const fn is_empty_flags(self) -> bool {
        self.bits() == 0
    }
}
