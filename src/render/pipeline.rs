//! The inlining pipeline.

use rayon::prelude::*;

use super::options::{normalize_tags, InlineOptions, InlinePreset};
use super::style::{insert_spacers, style_captions, style_lists, style_quotes};
use super::whitespace::{collapse_spaces, inline_text};
use crate::markup::registry::{nested_block_tags, BLOCK_TAGS, HIDDEN_TAGS};
use crate::markup::{
    decode_entities, peel_tags, remove_tags_matching, split_plaintext, strip_attributes,
    Direction, EntityOptions, TagPattern,
};

/// Renders markup as a single line of plain text.
///
/// The inliner owns its options. They may be changed between renders;
/// [`HtmlInliner::render`] itself only reads them, so one inliner can be
/// shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlInliner {
    options: InlineOptions,
}

impl HtmlInliner {
    /// Create an inliner with the given options.
    pub fn new(options: InlineOptions) -> Self {
        Self { options }
    }

    /// Create an inliner from a preset.
    pub fn from_preset(preset: InlinePreset) -> Self {
        Self::new(InlineOptions::from_preset(preset))
    }

    /// Inliner with the base removal set.
    pub fn base() -> Self {
        Self::from_preset(InlinePreset::Base)
    }

    /// Inliner that also removes headings, page chrome and navigation.
    pub fn semantic() -> Self {
        Self::from_preset(InlinePreset::Semantic)
    }

    /// Current options.
    pub fn options(&self) -> &InlineOptions {
        &self.options
    }

    /// Mutable access to the options.
    pub fn options_mut(&mut self) -> &mut InlineOptions {
        &mut self.options
    }

    /// The configured removal set.
    pub fn tags_to_remove(&self) -> &[String] {
        &self.options.tags_to_remove
    }

    /// Replace the removal set. Names are lowercased and deduplicated.
    pub fn set_tags_to_remove<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.tags_to_remove = normalize_tags(tags);
        self
    }

    /// Replace the entity decoding mode.
    pub fn set_entities(&mut self, entities: EntityOptions) -> &mut Self {
        self.options.entities = entities;
        self
    }

    /// The removal set actually applied: configured names followed by the
    /// sub-tags of any compound block tag among them, then the hidden tags.
    ///
    /// Hidden tags are always part of the result, whatever is configured.
    pub fn effective_tags_to_remove(&self) -> Vec<String> {
        let mut effective: Vec<String> = Vec::new();
        for tag in &self.options.tags_to_remove {
            effective.push(tag.clone());
            effective.extend(nested_block_tags(tag).iter().map(|t| t.to_string()));
        }
        effective.extend(HIDDEN_TAGS.iter().map(|t| t.to_string()));
        normalize_tags(effective)
    }

    /// Block-level tags that receive a leading space.
    ///
    /// Sub-tags of a compound entry are included only when neither the entry
    /// nor the sub-tag itself is removed.
    pub fn block_tags(&self) -> Vec<String> {
        block_tags_excluding(&self.effective_tags_to_remove())
    }

    /// Render one document.
    pub fn render(&self, html: &str) -> String {
        let (markup, tail) = match split_plaintext(html) {
            Some(split) => {
                log::debug!("plaintext marker found, {} bytes kept verbatim", split.tail.len());
                (split.markup, Some(split.tail))
            }
            None => (html, None),
        };

        let remove = self.effective_tags_to_remove();
        log::debug!("removing {} tag names with their content", remove.len());

        let mut inline = strip_attributes(markup);
        inline = style_lists(&inline);
        inline = style_quotes(&inline);
        inline = style_captions(&inline);
        inline = insert_spacers(&inline, &block_tags_excluding(&remove));
        log::trace!("styled markup: {} bytes", inline.len());

        inline = peel_tags(&inline, &remove);
        inline = remove_tags_matching(&inline, &TagPattern::new(&remove, Direction::Either));
        inline = decode_entities(&inline, &self.options.entities);
        log::trace!("text after tag removal: {} bytes", inline.len());

        if let Some(tail) = tail {
            inline.push_str(tail);
        }

        collapse_spaces(&inline_text(&inline))
    }

    /// Render many documents in parallel, preserving order.
    pub fn render_all<S>(&self, documents: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.render(doc.as_ref()))
            .collect()
    }
}

fn block_tags_excluding(remove: &[String]) -> Vec<String> {
    let removed = |name: &str| remove.iter().any(|r| r == name);
    let mut tags = Vec::new();

    for block in BLOCK_TAGS {
        tags.push(block.name.to_string());
        if block.is_compound() && !removed(block.name) {
            tags.extend(
                block
                    .nested
                    .iter()
                    .filter(|nested| !removed(**nested))
                    .map(|nested| nested.to_string()),
            );
        }
    }

    normalize_tags(tags)
}
