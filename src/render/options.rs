//! Inliner options and configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::markup::{registry::HIDDEN_TAGS, DocType, EntityOptions, QuoteStyle};

/// Tags removed with their content by the base preset, besides hidden tags.
pub const BASE_TAGS_TO_REMOVE: &[&str] = &[
    "table", "applet", "audio", "video", "canvas", "button", "command", "textarea", "select",
    "object", "iframe", "frameset",
];

/// Tags the semantic preset removes on top of the base preset.
///
/// Their text would otherwise be inlined without the context that made it
/// meaningful (headings, page chrome, navigation, figures).
pub const SEMANTIC_TAGS_TO_REMOVE: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "footer", "hgroup", "aside", "figure",
    "figcaption", "nav", "menu", "legend",
];

/// Removal set presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlinePreset {
    /// Tabular, embedded and interactive elements plus hidden elements
    #[default]
    Base,
    /// Base plus headings, structural and navigational elements
    Semantic,
}

/// Options for inlining markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineOptions {
    /// Block-level tags removed together with their content
    pub tags_to_remove: Vec<String>,

    /// Character reference decoding mode
    pub entities: EntityOptions,
}

impl InlineOptions {
    /// Create new options with the base preset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from a preset.
    pub fn from_preset(preset: InlinePreset) -> Self {
        match preset {
            InlinePreset::Base => Self::base(),
            InlinePreset::Semantic => Self::semantic(),
        }
    }

    /// Base preset options.
    pub fn base() -> Self {
        Self {
            tags_to_remove: normalize_tags(BASE_TAGS_TO_REMOVE.iter().chain(HIDDEN_TAGS)),
            entities: EntityOptions::default(),
        }
    }

    /// Semantic preset options.
    pub fn semantic() -> Self {
        Self::base().with_additional_tags(SEMANTIC_TAGS_TO_REMOVE)
    }

    /// Replace the removal set.
    pub fn with_tags_to_remove<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags_to_remove = normalize_tags(tags);
        self
    }

    /// Extend the removal set.
    pub fn with_additional_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<String> = tags.into_iter().map(|t| t.as_ref().to_string()).collect();
        self.tags_to_remove = normalize_tags(self.tags_to_remove.iter().chain(extra.iter()));
        self
    }

    /// Set the entity decoding mode.
    pub fn with_entities(mut self, entities: EntityOptions) -> Self {
        self.entities = entities;
        self
    }

    /// Set the entity doc type.
    pub fn with_doc_type(mut self, doc_type: DocType) -> Self {
        self.entities.doc_type = doc_type;
        self
    }

    /// Set the entity quote style.
    pub fn with_quotes(mut self, quotes: QuoteStyle) -> Self {
        self.entities.quotes = quotes;
        self
    }

    /// Load options from JSON. Missing fields fall back to the base preset.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        Ok(options.normalized())
    }

    /// Load options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize options to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn normalized(mut self) -> Self {
        self.tags_to_remove = normalize_tags(&self.tags_to_remove);
        self
    }
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self::base()
    }
}

/// Lowercase and deduplicate tag names, keeping first-seen order.
pub(crate) fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().to_lowercase();
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}
