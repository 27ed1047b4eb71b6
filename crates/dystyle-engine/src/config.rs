//! Engine configuration

use dystyle_css::Grammar;
use dystyle_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};

/// Engine configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix marking encoded class names
    pub prefix: String,

    /// Attribute that switches the compiler off for `<body>` or one element
    pub opt_out_attribute: String,

    /// Value of `opt_out_attribute` that means "off"
    pub opt_out_value: String,

    /// `id` of the generated `<style>` element
    pub style_element_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: dystyle_css::grammar::DEFAULT_PREFIX.to_string(),
            opt_out_attribute: "data-dystyle".to_string(),
            opt_out_value: "false".to_string(),
            style_element_id: "dySTYLEInternalCSS".to_string(),
        }
    }
}

impl Config {
    /// Load overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::Empty("prefix"));
        }
        if self.opt_out_attribute.is_empty() {
            return Err(ConfigError::Empty("opt_out_attribute"));
        }
        if self.style_element_id.is_empty() {
            return Err(ConfigError::Empty("style_element_id"));
        }
        if self.style_element_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidStyleId(self.style_element_id.clone()));
        }
        Ok(())
    }

    /// Class-name grammar for the configured prefix
    pub fn grammar(&self) -> Result<Grammar, ConfigError> {
        Grammar::with_prefix(&self.prefix).map_err(|source| ConfigError::Grammar {
            prefix: self.prefix.clone(),
            source,
        })
    }

    /// Whether an element carries the opt-out marker
    pub fn is_opted_out(&self, tree: &DomTree, id: NodeId) -> bool {
        tree.attribute(id, &self.opt_out_attribute) == Some(self.opt_out_value.as_str())
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config field `{0}` must not be empty")]
    Empty(&'static str),

    #[error("style element id `{0}` must not contain whitespace")]
    InvalidStyleId(String),

    #[error("class-name grammar for prefix `{prefix}` does not compile: {source}")]
    Grammar {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prefix, "lcs");
        assert_eq!(config.opt_out_attribute, "data-dystyle");
        assert_eq!(config.opt_out_value, "false");
        assert_eq!(config.style_element_id, "dySTYLEInternalCSS");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = Config::from_json(r#"{ "prefix": "ds", "style_element_id": "generated" }"#).unwrap();
        assert_eq!(config.prefix, "ds");
        assert_eq!(config.style_element_id, "generated");
        assert_eq!(config.opt_out_attribute, "data-dystyle");
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(matches!(Config::from_json(r#"{ "prefx": "ds" }"#), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_json_validates() {
        assert!(matches!(
            Config::from_json(r#"{ "prefix": "" }"#),
            Err(ConfigError::Empty("prefix"))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "style_element_id": "a b" }"#),
            Err(ConfigError::InvalidStyleId(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), Config::default());
    }

    #[test]
    fn test_grammar_uses_prefix() {
        let config = Config {
            prefix: "ds".into(),
            ..Config::default()
        };
        let grammar = config.grammar().unwrap();
        assert!(grammar.matches("dsColor_red"));
        assert!(!grammar.matches("lcsColor_red"));
    }
}
