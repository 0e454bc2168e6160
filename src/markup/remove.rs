//! Removal of tagged spans together with their content.

use std::collections::HashMap;

use super::pattern::{Direction, TagPattern};

/// Remove every top-level span of the given tag names.
///
/// Convenience wrapper around [`remove_tags_matching`].
pub fn remove_tags<I, S>(html: &str, names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    remove_tags_matching(html, &TagPattern::new(names, Direction::Either))
}

/// Remove every top-level span (tag pair plus content) matched by `pattern`.
///
/// Occurrences are tracked with one open-span counter per tag name. An
/// occurrence is only acted upon while no *other* name has an open span;
/// otherwise it is left in the stream untouched. This handles well-nested
/// runs of a single name at a time. Spans of two different names that are
/// cross-nested are not excised independently: the inner one is skipped until
/// the first-opened name closes.
///
/// Closing tags without a matching opening tag are dropped and never push a
/// counter below zero. When a span is still open at end of input, everything
/// from its opening tag onwards is dropped.
pub fn remove_tags_matching(html: &str, pattern: &TagPattern) -> String {
    let mut depths: HashMap<String, usize> = HashMap::new();
    let mut pointer = 0;
    let mut output = String::with_capacity(html.len());

    for tag in pattern.find_iter(html) {
        let depth: usize = depths.values().sum();
        let own = depths.entry(tag.name).or_insert(0);

        if *own != depth {
            continue;
        }

        if depth == 0 {
            output.push_str(&html[pointer..tag.start]);
        }

        *own = if tag.is_closing {
            own.saturating_sub(1)
        } else {
            *own + 1
        };
        pointer = tag.end;
    }

    if depths.values().sum::<usize>() == 0 {
        output.push_str(&html[pointer..]);
    } else {
        log::trace!("unclosed span at end of input, dropping {} bytes", html.len() - pointer);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_without_attributes() {
        assert_eq!(remove_tags("Foo <div>Bar</div> Baz", ["div"]), "Foo  Baz");
    }

    #[test]
    fn test_remove_with_attributes() {
        assert_eq!(
            remove_tags(r#"Foo <div style="color: red;">Bar</div> Baz"#, ["div"]),
            "Foo  Baz"
        );
    }

    #[test]
    fn test_remove_multiple_tags() {
        assert_eq!(
            remove_tags("Foo <div>Bar</div> Baz <span>Bam</span>", ["div", "span"]),
            "Foo  Baz "
        );
    }

    #[test]
    fn test_remove_only_some() {
        assert_eq!(
            remove_tags("Foo <div>Bar</div> Baz <span>Bam</span>", ["div"]),
            "Foo  Baz <span>Bam</span>"
        );
    }

    #[test]
    fn test_remove_nested_different_names() {
        assert_eq!(
            remove_tags("Foo <div>Bar <span>Baz</span></div> Bam", ["div", "span"]),
            "Foo  Bam"
        );
    }

    #[test]
    fn test_remove_nested_only_inner() {
        assert_eq!(
            remove_tags("Foo <div>Bar <span>Baz</span></div> Bam", ["span"]),
            "Foo <div>Bar </div> Bam"
        );
    }

    #[test]
    fn test_remove_same_name_nesting() {
        assert_eq!(
            remove_tags("a<div>b<div>c</div>d</div>e<div>f</div>g", ["div"]),
            "aeg"
        );
    }

    #[test]
    fn test_remove_case_insensitive() {
        assert_eq!(remove_tags("a<DIV>b</div>c", ["Div"]), "ac");
    }

    #[test]
    fn test_unmatched_closing_tag_is_dropped() {
        assert_eq!(remove_tags("a</div>b<div>c</div>d", ["div"]), "abd");
    }

    #[test]
    fn test_unclosed_span_drops_rest() {
        assert_eq!(remove_tags("a<div>b", ["div"]), "a");
    }

    #[test]
    fn test_cross_nested_inner_is_skipped() {
        // The div opens inside the span, so it is skipped while the span is
        // open. Its closing tag is then seen at root level and dropped alone,
        // leaving the text between the two closing tags in place.
        assert_eq!(
            remove_tags("x<span>a<div>b</span>c</div>y", ["div", "span"]),
            "xcy"
        );
    }

    #[test]
    fn test_other_tags_survive() {
        assert_eq!(
            remove_tags("<p>keep</p><table>drop</table><b>keep</b>", ["table"]),
            "<p>keep</p><b>keep</b>"
        );
    }

    #[test]
    fn test_unknown_name_is_inert() {
        let html = "<p>a</p>";
        assert_eq!(remove_tags(html, ["no such tag"]), html);
    }
}
