//! Quote-aware tag scanning.
//!
//! Tags are located by scanning raw text, not by building a document tree.
//! A tag starts at `<` and is followed by a name token (everything up to
//! whitespace, `>` or `<`). If whitespace follows the token, an attribute
//! region follows. Inside it a quote character opens a quoted value that only
//! the same quote character closes, so `>` inside `title="a > b"` does not end
//! the tag. Escaped quotes are not understood.
//!
//! A tag ends after the first unquoted `>`. A tag without one is closed
//! implicitly at the next unquoted `<` or at end of input.

/// Which side of an element a [`TagPattern`] matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Opening tags only (`<name>`)
    Open,
    /// Closing tags only (`</name>`)
    Close,
    /// Opening and closing tags
    #[default]
    Either,
}

impl Direction {
    fn accepts(self, is_closing: bool) -> bool {
        match self {
            Direction::Open => !is_closing,
            Direction::Close => is_closing,
            Direction::Either => true,
        }
    }
}

/// Byte span of a single scanned tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan {
    /// Offset of the opening `<`
    pub start: usize,
    /// Offset one past the name token
    pub name_end: usize,
    /// Offset one past the tag (after `>` when present)
    pub end: usize,
    /// Whether the tag was terminated by `>`
    pub terminated: bool,
}

impl TagSpan {
    /// The raw name token, including a leading `/` on closing tags.
    pub fn token<'a>(&self, html: &'a str) -> &'a str {
        &html[self.start + 1..self.name_end]
    }

    /// Whether the tag is a closing tag.
    pub fn is_closing(&self, html: &str) -> bool {
        self.token(html).starts_with('/')
    }

    /// The tag name without the closing slash or a self-closing suffix.
    pub fn name<'a>(&self, html: &'a str) -> &'a str {
        let token = self.token(html);
        let token = token.strip_prefix('/').unwrap_or(token);
        match token.find('/') {
            Some(idx) => &token[..idx],
            None => token,
        }
    }

    /// The lowercased tag name.
    pub fn lowercase_name(&self, html: &str) -> String {
        self.name(html).to_lowercase()
    }

    /// The full source text of the tag.
    pub fn as_str<'a>(&self, html: &'a str) -> &'a str {
        &html[self.start..self.end]
    }
}

/// A tag found by a [`TagPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    /// Lowercased tag name
    pub name: String,
    /// Whether this is a closing tag
    pub is_closing: bool,
    /// Offset of the opening `<`
    pub start: usize,
    /// Offset one past the tag
    pub end: usize,
}

impl TagOccurrence {
    fn from_span(span: &TagSpan, html: &str) -> Self {
        Self {
            name: span.lowercase_name(html),
            is_closing: span.is_closing(html),
            start: span.start,
            end: span.end,
        }
    }
}

pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Scan the tag starting at `start`, which must point at a `<`.
pub fn scan_tag(html: &str, start: usize) -> TagSpan {
    let bytes = html.as_bytes();
    debug_assert_eq!(bytes.get(start), Some(&b'<'));

    let mut pos = start + 1;
    while pos < bytes.len() && !matches!(bytes[pos], b'>' | b'<') && !is_space(bytes[pos]) {
        pos += 1;
    }
    let name_end = pos;

    if pos < bytes.len() && is_space(bytes[pos]) {
        let mut quote: Option<u8> = None;
        while pos < bytes.len() {
            let b = bytes[pos];
            match quote {
                Some(q) if b == q => quote = None,
                Some(_) => {}
                None => match b {
                    b'"' | b'\'' => quote = Some(b),
                    b'>' | b'<' => break,
                    _ => {}
                },
            }
            pos += 1;
        }
    }

    let terminated = pos < bytes.len() && bytes[pos] == b'>';
    let end = if terminated { pos + 1 } else { pos };

    TagSpan {
        start,
        name_end,
        end,
        terminated,
    }
}

/// Iterate over every tag in document order.
///
/// Every `<` starts a tag, so text between two spans never contains one.
pub fn tags(html: &str) -> Tags<'_> {
    Tags { html, pos: 0 }
}

/// Iterator returned by [`tags`].
pub struct Tags<'h> {
    html: &'h str,
    pos: usize,
}

impl Iterator for Tags<'_> {
    type Item = TagSpan;

    fn next(&mut self) -> Option<TagSpan> {
        let offset = self.html[self.pos..].find('<')?;
        let span = scan_tag(self.html, self.pos + offset);
        self.pos = span.end;
        Some(span)
    }
}

/// Case-insensitive matcher for a set of tag names.
///
/// Names that can never form a tag token (containing whitespace, `<` or `>`)
/// are accepted but never match. An empty name matches `<>` and `</>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    names: Vec<String>,
    direction: Direction,
}

impl TagPattern {
    /// Build a pattern from tag names.
    pub fn new<I, S>(names: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().to_lowercase();
            if !lowered.contains(&name) {
                lowered.push(name);
            }
        }
        Self {
            names: lowered,
            direction,
        }
    }

    /// Build a pattern for a single tag name.
    pub fn single(name: &str, direction: Direction) -> Self {
        Self::new([name], direction)
    }

    /// The lowercased, deduplicated names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The direction this pattern matches.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the scanned tag is matched by this pattern.
    pub fn matches_span(&self, span: &TagSpan, html: &str) -> bool {
        if !self.direction.accepts(span.is_closing(html)) {
            return false;
        }
        let name = span.lowercase_name(html);
        self.names.iter().any(|n| *n == name)
    }

    /// Iterate over matching tags in document order.
    pub fn find_iter<'a>(&'a self, html: &'a str) -> impl Iterator<Item = TagOccurrence> + 'a {
        tags(html)
            .filter(move |span| self.matches_span(span, html))
            .map(move |span| TagOccurrence::from_span(&span, html))
    }

    /// Whether any tag in `html` matches.
    pub fn is_match(&self, html: &str) -> bool {
        tags(html).any(|span| self.matches_span(&span, html))
    }
}
