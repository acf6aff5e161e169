//! Builtin themes — named token lists bound to shared styles.
//!
//! A [`Theme`] is compiled-in configuration: an ordered list of
//! categories, each a static slice of literal token strings bound to
//! one shared [`TokenStyle`]. Applying a theme registers every token of
//! every category into a [`Highlighter`], in declaration order, so a
//! theme that lists the same string in two categories gets the later
//! binding (none of the builtin themes do).
//!
//! Applying a theme never fails and is idempotent — loading twice
//! converges to the same bindings.

use ted_cell::{Attr, CellColor};

use crate::highlighter::Highlighter;
use crate::style::TokenStyle;

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// One category of a theme: a token list sharing a single style.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Every literal token string this category colors.
    pub tokens: &'static [&'static str],
    /// The one style all of them get.
    pub style: TokenStyle,
}

/// A named set of token-to-style bindings, loaded as a unit.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name, e.g. "java".
    pub name: &'static str,
    /// Categories in registration order — later categories win on
    /// overlapping token texts.
    pub categories: &'static [Category],
}

impl Theme {
    /// Register every binding of this theme into `hl`.
    ///
    /// Total: there is no condition under which loading fails. Existing
    /// bindings for the same token texts are overwritten.
    pub fn apply(&self, hl: &mut Highlighter) {
        for category in self.categories {
            for token in category.tokens {
                hl.set_style(*token, category.style);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builtin registry
// ---------------------------------------------------------------------------

/// Look up a builtin theme by name.
///
/// Returns `None` if the name is not recognized — a miss, not an error.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "java" | "default" => Some(java()),
        _ => None,
    }
}

/// List all available builtin theme names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["java", "default"]
}

// ---------------------------------------------------------------------------
// The "java" theme — Borland-IDE-like colors for Java keywords
// ---------------------------------------------------------------------------

/// White on blue, bold — control/type/modifier keywords.
const KEYWORD: TokenStyle = TokenStyle::new(
    CellColor::Ansi256(7),
    CellColor::Ansi256(4),
    Attr::BOLD,
);

/// Cyan on blue, bold — operators and separators.
const OPERATOR: TokenStyle = TokenStyle::new(
    CellColor::Ansi256(6),
    CellColor::Ansi256(4),
    Attr::BOLD,
);

/// Green on blue, bold — module keywords.
const MODULE: TokenStyle = TokenStyle::new(
    CellColor::Ansi256(2),
    CellColor::Ansi256(4),
    Attr::BOLD,
);

#[rustfmt::skip]
const JAVA_KEYWORDS: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "char", "float",
    "double", "void", "new",
    "static", "final", "volatile", "synchronized", "abstract",
    "public", "private", "protected",
    "class", "interface", "extends", "implements",
    "if", "else", "do", "while", "for", "break", "continue",
    "switch", "case", "default",
];

// Multi-character operators are listed in full: the split rule carves
// them into single characters, but callers that re-join runs (or look
// up pasted text) still get the category color.
#[rustfmt::skip]
const JAVA_OPERATORS: &[&str] = &[
    "[", "]", "(", ")", "{", "}",
    "*", "-", "+", "/", "=", "%",
    "^", "&", "!", "<<", ">>", "<<<", ">>>",
    "&&", "||",
    ">", "<", ">=", "<=", "!=", "==",
    ",", ";", ".", "?", ":",
];

const JAVA_MODULE_KEYWORDS: &[&str] = &["package", "import"];

/// The Java keyword theme.
#[must_use]
pub fn java() -> Theme {
    Theme {
        name: "java",
        categories: &[
            Category { tokens: JAVA_KEYWORDS, style: KEYWORD },
            Category { tokens: JAVA_OPERATORS, style: OPERATOR },
            Category { tokens: JAVA_MODULE_KEYWORDS, style: MODULE },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loaded() -> Highlighter {
        Highlighter::with_theme(&java())
    }

    // ── Registry ─────────────────────────────────────────────────────

    #[test]
    fn builtin_lookup_by_name() {
        assert!(builtin_theme("java").is_some());
        assert!(builtin_theme("default").is_some());
        assert!(builtin_theme("borland").is_none());
    }

    #[test]
    fn builtin_names_all_resolve() {
        for name in builtin_names() {
            assert!(builtin_theme(name).is_some(), "{name} should resolve");
        }
    }

    // ── Category styles ──────────────────────────────────────────────

    #[test]
    fn keywords_share_white_on_blue_bold() {
        let hl = loaded();
        let expected = Some(KEYWORD);
        assert_eq!(hl.style("if"), expected);
        assert_eq!(hl.style("while"), expected);
        assert_eq!(hl.style("class"), expected);
        assert_eq!(hl.style("synchronized"), expected);
    }

    #[test]
    fn operators_share_cyan_on_blue_bold() {
        let hl = loaded();
        let expected = Some(OPERATOR);
        assert_eq!(hl.style("=="), expected);
        assert_eq!(hl.style("<<<"), expected);
        assert_eq!(hl.style(";"), expected);
        assert_eq!(hl.style("{"), expected);
    }

    #[test]
    fn module_keywords_share_green_on_blue_bold() {
        let hl = loaded();
        let expected = Some(MODULE);
        assert_eq!(hl.style("package"), expected);
        assert_eq!(hl.style("import"), expected);
    }

    #[test]
    fn keyword_style_is_bold() {
        let style = loaded().style("for").unwrap();
        assert!(style.attrs.contains(Attr::BOLD));
        assert_eq!(style.fg, CellColor::Ansi256(7));
        assert_eq!(style.bg, CellColor::Ansi256(4));
    }

    // ── Misses ───────────────────────────────────────────────────────

    #[test]
    fn identifiers_are_unclassified() {
        let hl = loaded();
        assert_eq!(hl.style("myVariable"), None);
        assert_eq!(hl.style("x"), None);
        assert_eq!(hl.style("1"), None);
    }

    #[test]
    fn unclassified_before_and_after_load() {
        let mut hl = Highlighter::new();
        assert_eq!(hl.style("myVariable"), None);
        java().apply(&mut hl);
        assert_eq!(hl.style("myVariable"), None);
    }

    // ── Idempotence / overwrite ──────────────────────────────────────

    #[test]
    fn loading_twice_converges() {
        let mut hl = loaded();
        let count = hl.len();
        java().apply(&mut hl);
        assert_eq!(hl.len(), count);
        assert_eq!(hl.style("if"), Some(KEYWORD));
    }

    #[test]
    fn later_theme_overwrites_earlier_bindings() {
        let mut hl = Highlighter::new();
        hl.set_style("if", OPERATOR);
        java().apply(&mut hl);
        assert_eq!(hl.style("if"), Some(KEYWORD));
    }

    #[test]
    fn no_category_overlap_in_java_theme() {
        // Every binding count equals the sum of the category lists.
        let hl = loaded();
        let total = JAVA_KEYWORDS.len() + JAVA_OPERATORS.len() + JAVA_MODULE_KEYWORDS.len();
        assert_eq!(hl.len(), total);
    }
}
