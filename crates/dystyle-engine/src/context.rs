//! Style context
//!
//! Holds the two rule buckets and the stylesheet node for one document.
//! Buckets only grow; [`StyleContext::flush`] writes each rule once.

use dystyle_css::CssRule;
use dystyle_dom::{Document, DomResult, NodeId};
use indexmap::IndexSet;

use crate::Config;

/// Ordered rule texts, deduplicated by exact equality
#[derive(Debug, Clone, Default)]
pub struct RuleBucket {
    rules: IndexSet<String>,
    flushed: usize,
}

impl RuleBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule; `false` if the same text is already present
    pub fn insert(&mut self, text: &str) -> bool {
        if self.rules.contains(text) {
            return false;
        }
        self.rules.insert(text.to_string())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.rules.contains(text)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }

    /// Rules not yet written to the stylesheet
    fn pending(&self) -> impl Iterator<Item = &str> {
        self.iter().skip(self.flushed)
    }

    fn mark_flushed(&mut self) {
        self.flushed = self.rules.len();
    }
}

/// Buckets and stylesheet node for one document
#[derive(Debug, Clone)]
pub struct StyleContext {
    plain: RuleBucket,
    media: RuleBucket,
    style_element: NodeId,
}

impl StyleContext {
    /// Find or create the stylesheet element
    pub fn new(doc: &mut Document, config: &Config) -> DomResult<Self> {
        let style_element = doc.ensure_style_element(&config.style_element_id)?;
        Ok(Self {
            plain: RuleBucket::new(),
            media: RuleBucket::new(),
            style_element,
        })
    }

    /// Route a rule into its bucket; `false` for a duplicate
    pub fn insert(&mut self, rule: &CssRule) -> bool {
        self.insert_text(rule.as_str())
    }

    /// Route rule text by its `@media` prefix
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.starts_with("@media") {
            self.media.insert(text)
        } else {
            self.plain.insert(text)
        }
    }

    /// Append unwritten rules to the stylesheet, plain before media
    ///
    /// Returns the number of rules written.
    pub fn flush(&mut self, doc: &mut Document) -> DomResult<usize> {
        let pending: String = self.plain.pending().chain(self.media.pending()).collect();
        let count = self.plain.pending().count() + self.media.pending().count();
        if count > 0 {
            doc.append_style_text(self.style_element, &pending)?;
        }
        self.plain.mark_flushed();
        self.media.mark_flushed();
        tracing::debug!("Flushed {} rules to stylesheet {}", count, self.style_element);
        Ok(count)
    }

    /// All collected rules, plain then media
    pub fn stylesheet_text(&self) -> String {
        self.plain.iter().chain(self.media.iter()).collect()
    }

    pub fn plain(&self) -> &RuleBucket {
        &self.plain
    }

    pub fn media(&self) -> &RuleBucket {
        &self.media
    }

    pub fn style_element(&self) -> NodeId {
        self.style_element
    }
}
