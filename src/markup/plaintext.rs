//! Handling of the legacy `<plaintext>` element.
//!
//! `<plaintext>` has no closing tag: everything after it is raw text and is
//! never parsed as markup.

use super::pattern::tags;

const PLAINTEXT_TAG: &str = "plaintext";

/// A document cut at its first `<plaintext>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaintextSplit<'a> {
    /// Markup preceding the marker tag
    pub markup: &'a str,
    /// Verbatim text following the marker tag
    pub tail: &'a str,
}

/// Split `html` at the first `<plaintext>` tag.
///
/// Tags are skipped as a whole, so a `<plaintext>` inside another tag's
/// quoted attribute value is not a marker. Returns `None` when there is no
/// marker, in which case the document is used as-is.
pub fn split_plaintext(html: &str) -> Option<PlaintextSplit<'_>> {
    let marker = tags(html).find(|span| {
        !span.is_closing(html) && span.name(html).eq_ignore_ascii_case(PLAINTEXT_TAG)
    })?;

    Some(PlaintextSplit {
        markup: &html[..marker.start],
        tail: &html[marker.end..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plaintext() {
        let split = split_plaintext("A <b>B</b> <plaintext>C<d>").unwrap();
        assert_eq!(split.tail, "C<d>");
        assert_eq!(split.markup, "A <b>B</b> ");
    }

    #[test]
    fn test_split_plaintext_with_attributes_before() {
        let html = r#"Foo <b>Bar</b> <i class="class">Baz</i> <plaintext>Bam"#;
        let split = split_plaintext(html).unwrap();
        assert_eq!(split.tail, "Bam");
        assert_eq!(split.markup, r#"Foo <b>Bar</b> <i class="class">Baz</i> "#);
    }

    #[test]
    fn test_split_plaintext_absent() {
        assert!(split_plaintext("A <b>B</b>").is_none());
        assert!(split_plaintext("").is_none());
    }

    #[test]
    fn test_split_plaintext_first_marker_wins() {
        let split = split_plaintext("a<PLAINTEXT>b<plaintext>c").unwrap();
        assert_eq!(split.markup, "a");
        assert_eq!(split.tail, "b<plaintext>c");
    }

    #[test]
    fn test_marker_inside_attribute_value_ignored() {
        let html = r#"<a title="<plaintext>">x</a><plaintext attr="1">y"#;
        let split = split_plaintext(html).unwrap();
        assert_eq!(split.markup, r#"<a title="<plaintext>">x</a>"#);
        assert_eq!(split.tail, "y");
    }

    #[test]
    fn test_closing_plaintext_is_not_a_marker() {
        assert!(split_plaintext("a</plaintext>b").is_none());
    }

    #[test]
    fn test_longer_name_is_not_a_marker() {
        assert!(split_plaintext("a<plaintexts>b").is_none());
    }
}
