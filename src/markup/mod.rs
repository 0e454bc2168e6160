//! Pattern-based markup primitives.
//!
//! Everything here works on raw text; no document tree is ever built. Each
//! function takes a string and returns a new one, so the passes compose and
//! can be tested on their own.

mod attributes;
mod entities;
mod pattern;
mod peel;
mod plaintext;
mod preformat;
pub mod registry;
mod remove;

pub use attributes::strip_attributes;
pub use entities::{decode_entities, escape_special_chars, DocType, EntityOptions, QuoteStyle};
pub use pattern::{scan_tag, tags, Direction, TagOccurrence, TagPattern, TagSpan, Tags};
pub use peel::peel_tags;
pub use plaintext::{split_plaintext, PlaintextSplit};
pub use preformat::{preformatted, DEFAULT_TAB_SIZE};
pub use registry::{BlockTag, BLOCK_TAGS, HIDDEN_TAGS};
pub use remove::{remove_tags, remove_tags_matching};
