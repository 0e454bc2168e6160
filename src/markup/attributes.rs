//! Attribute removal.

use super::pattern::tags;

/// Remove every attribute from every tag.
///
/// Each tag is reduced to `<name>` or `</name>`. A self-closing slash is
/// dropped (`<br/>` and `<br />` both become `<br>`) and tags missing their
/// `>` are closed. Running this twice yields the same result as running it
/// once.
pub fn strip_attributes(html: &str) -> String {
    let mut output = String::with_capacity(html.len());
    let mut pointer = 0;

    for span in tags(html) {
        output.push_str(&html[pointer..span.start]);
        output.push('<');
        output.push_str(bare_token(span.token(html)));
        output.push('>');
        pointer = span.end;
    }
    output.push_str(&html[pointer..]);

    output
}

fn bare_token(token: &str) -> &str {
    match token.strip_prefix('/') {
        Some(rest) => &token[..1 + rest.trim_end_matches('/').len()],
        None => token.trim_end_matches('/'),
    }
}
