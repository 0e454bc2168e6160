//! Tag stripping that keeps inner text.

use super::pattern::tags;

/// Strip every tag whose name is not in `keep`, retaining the text around it.
///
/// Kept tags are copied verbatim. Name comparison is case-insensitive; `keep`
/// is expected to hold lowercased names.
pub fn peel_tags<S: AsRef<str>>(html: &str, keep: &[S]) -> String {
    let mut output = String::with_capacity(html.len());
    let mut pointer = 0;

    for span in tags(html) {
        output.push_str(&html[pointer..span.start]);
        let name = span.lowercase_name(html);
        if keep.iter().any(|k| k.as_ref() == name) {
            output.push_str(span.as_str(html));
        }
        pointer = span.end;
    }
    output.push_str(&html[pointer..]);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_peel_all_tags() {
        assert_eq!(peel_tags("Foo <b>Bar</b> <hr> Baz", &NONE), "Foo Bar  Baz");
    }

    #[test]
    fn test_peel_keeps_listed_tags() {
        assert_eq!(
            peel_tags("<p>a</p><table><tr><td>b</td></tr></table>", &["table", "td"]),
            "a<table><td>b</td></table>"
        );
    }

    #[test]
    fn test_peel_case_insensitive() {
        assert_eq!(peel_tags("<SCRIPT>x</Script><b>y</b>", &["script"]), "<SCRIPT>x</Script>y");
    }

    #[test]
    fn test_peel_quoted_attribute_values() {
        assert_eq!(peel_tags(r#"<a title="1 > 0">link</a>"#, &NONE), "link");
    }

    #[test]
    fn test_peel_unterminated_tag() {
        assert_eq!(peel_tags("text <em class=x", &NONE), "text ");
    }
}
