//! Punctuation passes that keep structure readable once tags are gone.
//!
//! All passes expect attribute-free tags (see [`crate::markup::strip_attributes`]).
//! The punctuation passes must run before [`insert_spacers`] so the inserted
//! spaces are not absorbed into their whitespace windows.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{Direction, TagPattern};

static ITEM_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\s)*(</(?:li|dd)>)").expect("ITEM_CLOSE regex should compile")
});
static TERM_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\s)*(</dt>)").expect("TERM_CLOSE regex should compile")
});
static QUOTE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:blockquote|q)>(?-u:\s)*").expect("QUOTE_OPEN regex should compile")
});
static QUOTE_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\s)*</(?:blockquote|q)>").expect("QUOTE_CLOSE regex should compile")
});
static CAPTION_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:figcaption|caption)>(?-u:\s)*").expect("CAPTION_OPEN regex should compile")
});
static CAPTION_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\s)*</(?:figcaption|caption)>")
        .expect("CAPTION_CLOSE regex should compile")
});

/// Terminate list items with `,` and description terms with `:`.
pub fn style_lists(html: &str) -> String {
    let html = ITEM_CLOSE.replace_all(html, ",${1}");
    TERM_CLOSE.replace_all(&html, ":${1}").into_owned()
}

/// Wrap `<blockquote>` and `<q>` contents in double quotes.
///
/// Whitespace just inside the tags stays outside the quotes.
pub fn style_quotes(html: &str) -> String {
    let html = QUOTE_OPEN.replace_all(html, "${0}\"");
    QUOTE_CLOSE.replace_all(&html, "\"${0}").into_owned()
}

/// Wrap `<figcaption>` and `<caption>` contents in parentheses.
///
/// Whitespace just inside the tags stays outside the parentheses.
pub fn style_captions(html: &str) -> String {
    let html = CAPTION_OPEN.replace_all(html, "${0}(");
    CAPTION_CLOSE.replace_all(&html, ")${0}").into_owned()
}

/// Put a space in front of every opening and closing tag named in `names`.
pub fn insert_spacers<S: AsRef<str>>(html: &str, names: &[S]) -> String {
    let pattern = TagPattern::new(names, Direction::Either);
    let mut output = String::with_capacity(html.len() + html.len() / 8);
    let mut pointer = 0;

    for tag in pattern.find_iter(html) {
        output.push_str(&html[pointer..tag.start]);
        output.push(' ');
        pointer = tag.start;
    }
    output.push_str(&html[pointer..]);

    output
}
