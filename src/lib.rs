//! # html-inline
//!
//! Render HTML markup as a single line of human-readable plain text.
//!
//! The output is meant for previews, notifications and excerpts where no
//! markup renderer is available. Structure that would otherwise be lost is
//! re-expressed as punctuation: list items end with a comma, description
//! terms with a colon, quotations are wrapped in double quotes and captions
//! in parentheses. Tables, embedded and interactive elements, and everything
//! that is never displayed (scripts, styles, head metadata) are dropped
//! together with their content.
//!
//! ## Quick Start
//!
//! ```
//! use html_inline::inline;
//!
//! let text = inline("<ul><li>One</li><li>Two</li></ul>");
//! assert_eq!(text, "One, Two,");
//! ```
//!
//! ## Configuration
//!
//! ```
//! use html_inline::{HtmlInliner, InlineOptions, QuoteStyle};
//!
//! let options = InlineOptions::semantic().with_quotes(QuoteStyle::Quotes);
//! let inliner = HtmlInliner::new(options);
//! assert_eq!(inliner.render("<h1>Title</h1><p>It&#039;s here</p>"), "It's here");
//! ```
//!
//! ## Features
//!
//! - **No document tree**: tags are found by quote-aware text scanning
//! - **Total**: malformed markup degrades instead of failing
//! - **Two presets**: a base removal set and a semantic superset
//! - **Plaintext aware**: content after the legacy `<plaintext>` tag is kept verbatim
//! - **Inverse formatter**: [`preformatted`] turns plain text into whitespace-preserving markup

pub mod error;
pub mod markup;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use markup::{
    decode_entities, peel_tags, preformatted, remove_tags, split_plaintext, strip_attributes,
    DocType, EntityOptions, QuoteStyle, TagPattern,
};
pub use render::{collapse_spaces, inline_text, HtmlInliner, InlineOptions, InlinePreset};

/// Render markup with the base preset.
///
/// # Example
///
/// ```
/// use html_inline::inline;
///
/// assert_eq!(inline("<script>var x=1;</script>Hello"), "Hello");
/// ```
pub fn inline(html: &str) -> String {
    HtmlInliner::base().render(html)
}

/// Render markup with the semantic preset.
///
/// Headings, page chrome, navigation and figures are removed as well.
///
/// # Example
///
/// ```
/// use html_inline::inline_semantic;
///
/// assert_eq!(inline_semantic("<nav>Home</nav><p>Body</p>"), "Body");
/// ```
pub fn inline_semantic(html: &str) -> String {
    HtmlInliner::semantic().render(html)
}

/// Render markup with custom options.
pub fn inline_with_options(html: &str, options: &InlineOptions) -> String {
    HtmlInliner::new(options.clone()).render(html)
}
