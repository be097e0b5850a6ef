//! Default values for context-graph configuration.
//!
//! This module provides centralized default values so that the extraction
//! options, the YAML configuration and the tests agree on one convention.

/// Matches `${key}` placeholders; the key text is capture group 1.
pub const DEFAULT_TOKENIZER_PATTERN: &str = r"\$\{([^}]+)\}";

/// Capture group holding the referenced key in [`DEFAULT_TOKENIZER_PATTERN`].
pub const DEFAULT_GROUP: usize = 1;

/// Marker for template-bearing keys, e.g. `build.version.format` produces
/// the value of `build.version`.
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".format";

/// Serde default for the `tokenizer-pattern` option.
pub fn default_tokenizer_pattern() -> String {
    DEFAULT_TOKENIZER_PATTERN.to_string()
}

/// Serde default for the `group` option.
pub fn default_group() -> usize {
    DEFAULT_GROUP
}
