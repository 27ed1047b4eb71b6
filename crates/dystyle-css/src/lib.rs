//! dySTYLE CSS - class-name driven rule compiler
//!
//! Encoded class names such as `lcsMQMaxWidth600PX_Child_Color.Margin_red.mn4rem`
//! carry CSS declarations. This crate recognises them ([`grammar`]),
//! validates their tokens against the pattern library and lookup tables, and
//! compiles them into CSS rule text ([`compiler`]).

pub mod compiler;
mod error;
pub mod grammar;
pub mod media;
pub mod patterns;
pub mod properties;
pub mod structure;
pub mod tables;
pub mod values;

use std::fmt;

pub use compiler::{CompiledRule, RuleCompiler, Validated};
pub use error::{CompileError, MismatchReport};
pub use grammar::{ClassNameMatch, Grammar, Pseudo};
pub use media::{MediaCondition, MediaFeature};
pub use structure::StructuralSpec;
pub use values::Value;

/// CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// A finished rule, flat or wrapped in `@media`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    /// Full rule text as written to the stylesheet
    pub text: String,
    pub selector: String,
    pub declarations: Vec<Declaration>,
    pub media: Option<MediaCondition>,
}

impl CssRule {
    pub fn is_media(&self) -> bool {
        self.media.is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_display() {
        let decl = Declaration {
            property: "margin-top".into(),
            value: "-4rem".into(),
            important: false,
        };
        assert_eq!(decl.to_string(), "margin-top: -4rem;");

        let decl = Declaration { important: true, ..decl };
        assert_eq!(decl.to_string(), "margin-top: -4rem !important;");
    }
}
