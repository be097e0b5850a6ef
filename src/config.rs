//! # Configuration Schema and Parsing
//!
//! A builder can be described in YAML instead of code:
//!
//! ```yaml
//! tokenizer-pattern: '\$\{([^}]+)\}'
//! group: 1
//! transformation:
//!   suffix: .format
//! ```
//!
//! Both `tokenizer-pattern` and `group` default to the `${key}` convention
//! from [`defaults`](crate::defaults). `transformation` is optional and takes
//! one of two shapes:
//!
//! - `suffix`: keys ending in the suffix derive the key without it.
//! - `pattern` + `replacement`: keys matching the regex derive the key
//!   obtained by replacing the match, with `$1`-style group references.
//!
//! Parsing only checks the document shape. Patterns and capture groups are
//! validated by [`GraphConfig::to_builder`], once, before any build.

use serde::{Deserialize, Serialize};

use crate::builder::GraphBuilder;
use crate::defaults::{default_group, default_tokenizer_pattern};
use crate::error::{Error, Result};
use crate::extraction::ExtractionOptions;
use crate::suggestions;
use crate::transform::{PatternRule, SuffixRule};

/// Construction-time options for a [`GraphBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GraphConfig {
    /// Regex recognizing a key reference inside a value
    #[serde(default = "default_tokenizer_pattern")]
    pub tokenizer_pattern: String,

    /// Capture group holding the referenced key
    #[serde(default = "default_group")]
    pub group: usize,

    /// Optional rule linking derived keys to their template keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<TransformationConfig>,
}

/// Declarative form of the provided transformation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformationConfig {
    /// Strip a fixed suffix
    Suffix { suffix: String },
    /// Regex rename
    Pattern {
        pattern: String,
        replacement: String,
    },
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            tokenizer_pattern: default_tokenizer_pattern(),
            group: default_group(),
            transformation: None,
        }
    }
}

impl GraphConfig {
    /// Validate the configuration and create a builder from it.
    pub fn to_builder(&self) -> Result<GraphBuilder> {
        let options = ExtractionOptions::new(&self.tokenizer_pattern, self.group)?;
        let builder = GraphBuilder::new(options);

        let builder = match &self.transformation {
            None => builder,
            Some(TransformationConfig::Suffix { suffix }) => {
                builder.with_rule(SuffixRule::new(suffix.clone())?)
            }
            Some(TransformationConfig::Pattern {
                pattern,
                replacement,
            }) => builder.with_rule(PatternRule::new(pattern, replacement.clone())?),
        };

        Ok(builder)
    }
}

/// Parse a YAML string into a `GraphConfig`.
///
/// An empty document yields the default configuration.
pub fn parse(yaml_content: &str) -> Result<GraphConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(GraphConfig::default());
    }
    serde_yaml::from_str(yaml_content).map_err(|e| suggestions::config_parse(&e))
}

/// Parse a `GraphConfig` from a YAML file path
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<GraphConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
