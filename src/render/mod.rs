//! Rendering module for turning markup into inline plain text.

mod options;
mod pipeline;
mod style;
mod whitespace;

pub use options::{InlineOptions, InlinePreset, BASE_TAGS_TO_REMOVE, SEMANTIC_TAGS_TO_REMOVE};
pub use pipeline::HtmlInliner;
pub use style::{insert_spacers, style_captions, style_lists, style_quotes};
pub use whitespace::{collapse_spaces, inline_text};
