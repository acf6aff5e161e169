// SPDX-License-Identifier: MIT
//
// ted-cell — cell styling primitives for the ted editor widgets.
//
// The smallest vocabulary the presentation layer needs to paint one
// terminal cell: a color value (`CellColor`) and a text attribute
// bitfield (`Attr`). Higher layers (the highlight engine, the view)
// bundle these into styles; this crate stays deliberately tiny so that
// every consumer agrees on the same value types.

pub mod attr;
pub mod color;

pub use attr::Attr;
pub use color::CellColor;
