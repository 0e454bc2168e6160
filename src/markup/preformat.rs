//! Plain text to whitespace-preserving markup.
//!
//! This is the inverse direction of the inliner and shares nothing with it.

use std::sync::LazyLock;

use regex::Regex;

use super::entities::{escape_special_chars, QuoteStyle};

/// Default number of `&nbsp;` a tab expands to.
pub const DEFAULT_TAB_SIZE: usize = 4;

const NBSP: &str = "&nbsp;";

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n\r|\n|\r").expect("LINE_BREAK regex should compile"));

/// Render plain text as markup whose whitespace survives rendering.
///
/// Special characters are escaped, a space at the start or end of a line
/// becomes `&nbsp;`, every remaining double space becomes `" &nbsp;"`, tabs
/// expand to `tab_size` non-breaking spaces, and `<br />` is inserted before
/// each line break. Long lines may still wrap when displayed.
pub fn preformatted(plain: &str, tab_size: usize, quotes: QuoteStyle) -> String {
    let escaped = escape_special_chars(plain, quotes);

    let edges = escaped
        .split('\n')
        .map(protect_line_edges)
        .collect::<Vec<_>>()
        .join("\n");

    let spaced = edges
        .replace("  ", " &nbsp;")
        .replace('\t', &NBSP.repeat(tab_size));

    LINE_BREAK.replace_all(&spaced, "<br />${0}").into_owned()
}

fn protect_line_edges(line: &str) -> String {
    let (head, rest) = match line.strip_prefix(' ') {
        Some(rest) => (NBSP, rest),
        None => ("", line),
    };
    match rest.strip_suffix(' ') {
        Some(body) => format!("{head}{body}{NBSP}"),
        None => format!("{head}{rest}"),
    }
}
