//! # ted-highlight — token classification for syntax-highlighted rendering
//!
//! Assigns display styles to tokens of source text. The engine is
//! deliberately context-free: it knows nothing about grammars, lexical
//! state, or lines other than the one being scanned. A theme enumerates
//! every literal token string it wants colored; everything else falls
//! back to the caller's default style.
//!
//! # Architecture
//!
//! ```text
//! theme.rs:       builtin themes — token lists bound to shared styles
//!     │ apply
//!     ▼
//! highlighter.rs: Highlighter — exact token → TokenStyle lookup,
//!     │           plus the split-character predicate
//!     ▼
//! scan.rs:        tokens() — carve one line into tokens using the
//!                 split rule (what the view layer does while painting)
//! ```
//!
//! The view layer scans a line left to right with [`scan::tokens`],
//! looks each token up with [`Highlighter::style`], and paints either
//! the returned style or its own default. Lookup misses are the normal
//! case (identifiers, literals, whitespace), not errors.
//!
//! The table is built once at startup and read-only afterwards. Live
//! theme switching is copy-and-swap: build a fresh [`Highlighter`] from
//! the new theme and replace the old value wholesale — readers never
//! observe a half-populated table.

pub mod highlighter;
pub mod scan;
pub mod style;
pub mod theme;

pub use highlighter::Highlighter;
pub use style::TokenStyle;
pub use theme::Theme;
