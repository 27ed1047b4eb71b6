//! Class-name grammar
//!
//! Recognises encoded class names of the form
//! `lcs[<media>_][<spec>_][<pseudo>_]<Properties>_<values>[_IMPT]` and splits
//! them into their tokens.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::patterns::{MEDIA_QUERY, PROPERTIES, SPECS_SELECTION, VALUES};

/// Prefix that marks an encoded class name
pub const DEFAULT_PREFIX: &str = "lcs";

/// Compiled-size limit for the full grammar (64 MiB)
const GRAMMAR_SIZE_LIMIT: usize = 64 * (1 << 20);

static DEFAULT_GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| Grammar::with_prefix(DEFAULT_PREFIX).expect("default class-name grammar compiles"));

/// Pseudo target appended to the derived selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pseudo {
    After,
    Before,
    Hover,
    Focus,
}

impl Pseudo {
    /// `APE`, `BPE`, `HPE`, `FPE`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "APE" => Some(Pseudo::After),
            "BPE" => Some(Pseudo::Before),
            "HPE" => Some(Pseudo::Hover),
            "FPE" => Some(Pseudo::Focus),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Pseudo::After => "APE",
            Pseudo::Before => "BPE",
            Pseudo::Hover => "HPE",
            Pseudo::Focus => "FPE",
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Pseudo::After => "::after",
            Pseudo::Before => "::before",
            Pseudo::Hover => ":hover",
            Pseudo::Focus => ":focus",
        }
    }
}

/// A decomposed encoded class name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNameMatch {
    /// The class name as found on the element
    pub raw: String,
    /// `MQ...` token
    pub media_query: Option<String>,
    /// Structural spec token, e.g. `ChildrenNotFirst`
    pub structure: Option<String>,
    pub pseudo: Option<Pseudo>,
    /// Dot-joined property tokens
    pub properties: String,
    /// Dot-joined value tokens
    pub values: String,
    pub important: bool,
}

impl ClassNameMatch {
    /// Decompose with the default `lcs` grammar
    pub fn parse(class_name: &str) -> Option<Self> {
        DEFAULT_GRAMMAR.parse(class_name)
    }
}

/// The composed class-name pattern for one prefix
#[derive(Debug, Clone)]
pub struct Grammar {
    prefix: String,
    regex: Regex,
}

impl Grammar {
    pub fn with_prefix(prefix: &str) -> Result<Self, regex::Error> {
        let pattern = format!(
            "^{prefix}(?:(?P<mq>{MEDIA_QUERY})_)?(?:(?P<spec>{SPECS_SELECTION})_)?(?:(?P<pseudo>APE|BPE|HPE|FPE)_)?(?P<props>{PROPERTIES})_(?P<values>{VALUES})(?P<impt>_IMPT)?$",
            prefix = regex::escape(prefix),
        );
        let regex = RegexBuilder::new(&pattern).size_limit(GRAMMAR_SIZE_LIMIT).build()?;
        Ok(Self {
            prefix: prefix.to_string(),
            regex,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Cheap recognition check
    pub fn matches(&self, class_name: &str) -> bool {
        class_name.starts_with(&self.prefix) && self.regex.is_match(class_name)
    }

    /// Decompose a class name; `None` when it is not encoded
    pub fn parse(&self, class_name: &str) -> Option<ClassNameMatch> {
        if !class_name.starts_with(&self.prefix) {
            return None;
        }
        let caps = self.regex.captures(class_name)?;
        let text = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

        Some(ClassNameMatch {
            raw: class_name.to_string(),
            media_query: text("mq"),
            structure: text("spec"),
            pseudo: caps.name("pseudo").and_then(|m| Pseudo::from_code(m.as_str())),
            properties: text("props")?,
            values: text("values")?,
            important: caps.name("impt").is_some(),
        })
    }
}

impl Default for Grammar {
    fn default() -> Self {
        DEFAULT_GRAMMAR.clone()
    }
}
