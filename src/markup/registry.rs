//! Static tag tables.

/// A block-level tag, optionally with sub-tags that are only block-level when
/// nested under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTag {
    /// Tag name
    pub name: &'static str,
    /// Sub-tags that count as block-level under this tag
    pub nested: &'static [&'static str],
}

impl BlockTag {
    const fn simple(name: &'static str) -> Self {
        Self { name, nested: &[] }
    }

    const fn compound(name: &'static str, nested: &'static [&'static str]) -> Self {
        Self { name, nested }
    }

    /// Whether this entry carries sub-tags.
    pub fn is_compound(&self) -> bool {
        !self.nested.is_empty()
    }
}

/// Tags whose elements cause a visual line break.
pub static BLOCK_TAGS: &[BlockTag] = &[
    BlockTag::simple("aside"),
    BlockTag::simple("article"),
    BlockTag::simple("section"),
    BlockTag::compound("figure", &["figcaption"]),
    BlockTag::simple("footer"),
    BlockTag::simple("header"),
    BlockTag::simple("hgroup"),
    BlockTag::simple("h1"),
    BlockTag::simple("h2"),
    BlockTag::simple("h3"),
    BlockTag::simple("h4"),
    BlockTag::simple("h5"),
    BlockTag::simple("h6"),
    BlockTag::simple("address"),
    BlockTag::simple("p"),
    BlockTag::simple("blockquote"),
    BlockTag::simple("div"),
    BlockTag::simple("dialog"),
    BlockTag::simple("dir"),
    BlockTag::compound("ul", &["li"]),
    BlockTag::compound("ol", &["li"]),
    BlockTag::compound("dl", &["dt", "dd"]),
    BlockTag::simple("body"),
    BlockTag::simple("center"),
    BlockTag::simple("details"),
    BlockTag::simple("summary"),
    BlockTag::simple("form"),
    BlockTag::simple("fieldset"),
    BlockTag::simple("html"),
    BlockTag::simple("pre"),
    BlockTag::simple("plaintext"),
    BlockTag::simple("main"),
    BlockTag::simple("legend"),
    BlockTag::simple("nav"),
    BlockTag::simple("menu"),
    BlockTag::compound(
        "table",
        &["td", "th", "tr", "thead", "tbody", "tfoot", "caption"],
    ),
    BlockTag::simple("applet"),
    BlockTag::simple("audio"),
    BlockTag::simple("video"),
    BlockTag::simple("canvas"),
    BlockTag::simple("button"),
    BlockTag::simple("command"),
    BlockTag::simple("textarea"),
    BlockTag::simple("select"),
    BlockTag::simple("object"),
    BlockTag::simple("iframe"),
    BlockTag::simple("frameset"),
];

/// Tags whose content is never meant for display.
pub static HIDDEN_TAGS: &[&str] = &[
    "noframes", "noscript", "style", "script", "head", "map", "datalist", "title", "option",
    "colgroup", "optgroup",
];

/// Look up a block-level tag by lowercased name.
pub fn block_tag(name: &str) -> Option<&'static BlockTag> {
    BLOCK_TAGS.iter().find(|tag| tag.name == name)
}

/// Sub-tags of a compound block tag, or an empty slice.
pub fn nested_block_tags(name: &str) -> &'static [&'static str] {
    block_tag(name).map(|tag| tag.nested).unwrap_or(&[])
}

/// Whether `name` is one of the always-hidden tags.
pub fn is_hidden(name: &str) -> bool {
    HIDDEN_TAGS.contains(&name)
}
