//! Whitespace folding.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK_OR_TAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|[\r\n\t]").expect("LINE_BREAK_OR_TAB regex should compile"));
static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("MULTI_SPACE regex should compile"));

/// Replace every line break and tab with a single space.
///
/// `\r\n` counts as one line break.
pub fn inline_text(text: &str) -> String {
    LINE_BREAK_OR_TAB.replace_all(text, " ").into_owned()
}

/// Fold runs of spaces into one and trim both ends.
///
/// Only spaces are folded; line breaks and tabs are expected to have been
/// turned into spaces by [`inline_text`] already.
pub fn collapse_spaces(text: &str) -> String {
    MULTI_SPACE
        .replace_all(text, " ")
        .trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_text() {
        assert_eq!(inline_text("Foo\nBar\tBaz"), "Foo Bar Baz");
        assert_eq!(inline_text("a\r\nb\rc"), "a b c");
        assert_eq!(inline_text("a\n\nb"), "a  b");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("Foo   Bar Baz  Bam"), "Foo Bar Baz Bam");
        assert_eq!(collapse_spaces("  padded  "), "padded");
        assert_eq!(collapse_spaces(""), "");
    }

    #[test]
    fn test_collapse_keeps_non_breaking_spaces() {
        assert_eq!(collapse_spaces("\u{A0}a\u{A0} "), "\u{A0}a\u{A0}");
    }

    #[test]
    fn test_collapse_idempotent() {
        for input in ["  a  b  ", "x", " ", "a \u{A0} b", "tab\tkept"] {
            let once = collapse_spaces(input);
            assert_eq!(collapse_spaces(&once), once);
        }
    }
}
