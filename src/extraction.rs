//! # Token Extraction
//!
//! Finds the keys a property value refers to. A value such as
//! `${major.version}.${minor.version}` references `major.version` and
//! `minor.version`; the tokenizer pattern decides what a reference looks like
//! and the capture group decides which part of a match is the key.
//!
//! The pattern and group are validated once, in [`ExtractionOptions::new`],
//! so extraction itself cannot fail.

use std::collections::BTreeSet;

use log::trace;
use regex::Regex;

use crate::defaults::{DEFAULT_GROUP, DEFAULT_TOKENIZER_PATTERN};
use crate::error::Result;
use crate::suggestions;

/// How a referenced key is recognized inside a value string.
///
/// Cloning is cheap and the options are `Send + Sync`, so one instance can
/// be shared read-only between builders.
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    pattern: Regex,
    group: usize,
}

impl ExtractionOptions {
    /// Compile `pattern` and check that it defines capture group `group`.
    pub fn new(pattern: &str, group: usize) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| suggestions::invalid_pattern(pattern, &e))?;
        Self::from_regex(regex, group)
    }

    /// Use an already compiled regex, checking that it defines `group`.
    ///
    /// Group 0 (the whole match) is always valid.
    pub fn from_regex(pattern: Regex, group: usize) -> Result<Self> {
        // captures_len counts the implicit group 0
        let available = pattern.captures_len() - 1;
        if group > available {
            return Err(suggestions::capture_group_out_of_range(
                pattern.as_str(),
                group,
                available,
            ));
        }
        Ok(Self { pattern, group })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn group(&self) -> usize {
        self.group
    }

    /// Return the distinct keys referenced by `value`.
    ///
    /// Every non-overlapping match contributes the text of the configured
    /// group. A key referenced more than once is returned once. An optional
    /// group that did not take part in a match contributes nothing.
    pub fn extract(&self, value: &str) -> BTreeSet<String> {
        let mut tokens = BTreeSet::new();
        for captures in self.pattern.captures_iter(value) {
            match captures.get(self.group) {
                Some(token) => {
                    tokens.insert(token.as_str().to_string());
                }
                None => trace!(
                    "group {} did not participate in match '{}'",
                    self.group,
                    &captures[0]
                ),
            }
        }
        tokens
    }
}

impl Default for ExtractionOptions {
    /// `${key}` placeholders, key in group 1.
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_TOKENIZER_PATTERN)
                .expect("default tokenizer pattern is a valid regex"),
            group: DEFAULT_GROUP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn tokens(options: &ExtractionOptions, value: &str) -> Vec<String> {
        options.extract(value).into_iter().collect()
    }

    #[test]
    fn test_extract_no_matches_is_empty() {
        let options = ExtractionOptions::default();
        assert!(options.extract("1").is_empty());
        assert!(options.extract("").is_empty());
        assert!(options.extract("$ {not.a.ref}").is_empty());
    }

    #[test]
    fn test_extract_multiple_references() {
        let options = ExtractionOptions::default();
        assert_eq!(
            tokens(
                &options,
                "${major.version}.${minor.version}.${patch.number}"
            ),
            vec!["major.version", "minor.version", "patch.number"]
        );
    }

    #[test]
    fn test_extract_deduplicates_repeated_reference() {
        let options = ExtractionOptions::default();
        let result = options.extract("${a}-${a}-${a}");
        assert_eq!(result.len(), 1);
        assert!(result.contains("a"));
    }

    #[test]
    fn test_extract_self_reference_is_kept() {
        // Only the value is scanned, and a value naming its own key is passed through
        let options = ExtractionOptions::default();
        assert!(options.extract("${x}+1").contains("x"));
    }

    #[test]
    fn test_extract_custom_pattern_and_group() {
        let options = ExtractionOptions::new(r"%\((\w+)\)(s|d)", 1).unwrap();
        assert_eq!(tokens(&options, "%(name)s is %(age)d"), vec!["age", "name"]);

        let suffixes = ExtractionOptions::new(r"%\((\w+)\)(s|d)", 2).unwrap();
        assert_eq!(tokens(&suffixes, "%(name)s is %(age)d"), vec!["d", "s"]);
    }

    #[test]
    fn test_extract_group_zero_is_whole_match() {
        let options = ExtractionOptions::new(r"@[a-z]+", 0).unwrap();
        assert_eq!(tokens(&options, "@home and @work"), vec!["@home", "@work"]);
    }

    #[test]
    fn test_extract_skips_non_participating_group() {
        let options = ExtractionOptions::new(r"\$\{([^}]+)\}|\$(\w+)", 2).unwrap();
        assert_eq!(tokens(&options, "${braced} $bare"), vec!["bare"]);
    }

    #[test]
    fn test_new_rejects_invalid_pattern() {
        let result = ExtractionOptions::new(r"\$\{([^}]+\}", 1);
        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    }

    #[test]
    fn test_new_rejects_group_out_of_range() {
        let result = ExtractionOptions::new(r"\$\{([^}]+)\}", 2);
        match result {
            Err(Error::CaptureGroupOutOfRange {
                group, available, ..
            }) => {
                assert_eq!(group, 2);
                assert_eq!(available, 1);
            }
            other => panic!("Expected CaptureGroupOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_group_without_any_groups() {
        let result = ExtractionOptions::new(r"\$\w+", 1);
        assert!(matches!(
            result,
            Err(Error::CaptureGroupOutOfRange { available: 0, .. })
        ));
    }

    #[test]
    fn test_default_options() {
        let options = ExtractionOptions::default();
        assert_eq!(options.pattern().as_str(), DEFAULT_TOKENIZER_PATTERN);
        assert_eq!(options.group(), DEFAULT_GROUP);
    }
}
