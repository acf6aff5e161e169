//! Line scanning — carve one line of text into tokens.
//!
//! This is the loop the view layer runs while painting: scan left to
//! right, emit each split character as its own one-character token, and
//! everything between as maximal same-class runs. Whitespace runs are
//! yielded too (the view still has to paint them); their lookups miss,
//! which is the defined behavior.
//!
//! Concatenating the yielded tokens reproduces the input line exactly.

use crate::highlighter::Highlighter;

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// Character class for token boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// A split character — always its own one-character token.
    Split,
    /// Whitespace within a line (space, tab).
    Blank,
    /// Everything else — letters, digits, any other Unicode.
    Text,
}

fn classify(ch: char) -> CharClass {
    if Highlighter::is_split_char(ch) {
        CharClass::Split
    } else if ch.is_whitespace() {
        CharClass::Blank
    } else {
        CharClass::Text
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Scan a line into tokens.
///
/// Yields borrowed slices of `line`: each split character alone, then
/// maximal runs of text or whitespace. The empty line yields nothing.
///
/// ```
/// use ted_highlight::scan::tokens;
///
/// let t: Vec<&str> = tokens("a+b").collect();
/// assert_eq!(t, ["a", "+", "b"]);
/// ```
pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens { line, pos: 0 }
}

/// Iterator over the tokens of one line. See [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.line[self.pos..];
        let first = rest.chars().next()?;
        let class = classify(first);

        let len = if class == CharClass::Split {
            first.len_utf8()
        } else {
            // Extend the run while the class holds.
            rest.char_indices()
                .find(|&(_, ch)| classify(ch) != class)
                .map_or(rest.len(), |(idx, _)| idx)
        };

        let token = &rest[..len];
        self.pos += len;
        Some(token)
    }
}
