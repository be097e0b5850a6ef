//! # Transformation Rules
//!
//! A transformation rule links a *derived* key to the template key that
//! produces its value. With a suffix rule for `.format`, resolving
//! `build.version.format` yields the value of `build.version`, so
//! `build.version` must be ordered after `build.version.format`.
//!
//! Rules are pluggable through the [`TransformationRule`] trait. Three
//! implementations are provided:
//!
//! - [`SuffixRule`]: strip a fixed suffix (`build.date.format` -> `build.date`).
//! - [`PatternRule`]: regex rename with capture group expansion.
//! - [`FnRule`]: a pair of closures for ad-hoc rules.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::defaults::DEFAULT_TEMPLATE_SUFFIX;
use crate::error::Result;
use crate::suggestions;

/// Predicate and mapping identifying keys that produce a derived key.
///
/// `matches` must be pure. `transform` is only called for keys that match
/// and must be deterministic.
pub trait TransformationRule: Send + Sync {
    /// Whether `key` is a template key that produces a derived key.
    fn matches(&self, key: &str) -> bool;

    /// Name of the key produced by resolving `key`.
    fn transform(&self, key: &str) -> String;
}

impl<T: TransformationRule + ?Sized> TransformationRule for &T {
    fn matches(&self, key: &str) -> bool {
        (**self).matches(key)
    }

    fn transform(&self, key: &str) -> String {
        (**self).transform(key)
    }
}

impl<T: TransformationRule + ?Sized> TransformationRule for Box<T> {
    fn matches(&self, key: &str) -> bool {
        (**self).matches(key)
    }

    fn transform(&self, key: &str) -> String {
        (**self).transform(key)
    }
}

impl<T: TransformationRule + ?Sized> TransformationRule for Arc<T> {
    fn matches(&self, key: &str) -> bool {
        (**self).matches(key)
    }

    fn transform(&self, key: &str) -> String {
        (**self).transform(key)
    }
}

/// Maps `<derived><suffix>` to `<derived>`.
///
/// A key equal to the suffix does not match, since it would derive an empty key.
/// The suffix itself is never empty: an empty suffix would map every key to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    suffix: String,
}

impl SuffixRule {
    pub fn new(suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(suggestions::empty_suffix());
        }
        Ok(Self { suffix })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for SuffixRule {
    /// The `.format` template marker.
    fn default() -> Self {
        Self {
            suffix: DEFAULT_TEMPLATE_SUFFIX.to_string(),
        }
    }
}

impl TransformationRule for SuffixRule {
    fn matches(&self, key: &str) -> bool {
        key.len() > self.suffix.len() && key.ends_with(&self.suffix)
    }

    fn transform(&self, key: &str) -> String {
        key.strip_suffix(self.suffix.as_str())
            .unwrap_or(key)
            .to_string()
    }
}

/// Regex based rule: keys matching `pattern` derive the key obtained by
/// replacing the first match with `replacement`.
///
/// The replacement may reference capture groups as `$1` or `${name}`, as in
/// [`Regex::replace`].
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    replacement: String,
}

impl PatternRule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| suggestions::invalid_pattern(pattern, &e))?;
        Ok(Self {
            pattern: regex,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl TransformationRule for PatternRule {
    fn matches(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }

    fn transform(&self, key: &str) -> String {
        self.pattern
            .replace(key, self.replacement.as_str())
            .into_owned()
    }
}

/// Rule built from two closures.
///
/// ```
/// use context_graph::transform::{FnRule, TransformationRule};
///
/// let rule = FnRule::new(
///     |key: &str| key.starts_with("tmpl."),
///     |key: &str| key.trim_start_matches("tmpl.").to_string(),
/// );
/// assert!(rule.matches("tmpl.banner"));
/// assert_eq!(rule.transform("tmpl.banner"), "banner");
/// ```
pub struct FnRule<M, T> {
    matches: M,
    transform: T,
}

impl<M, T> FnRule<M, T>
where
    M: Fn(&str) -> bool + Send + Sync,
    T: Fn(&str) -> String + Send + Sync,
{
    pub fn new(matches: M, transform: T) -> Self {
        Self { matches, transform }
    }
}

impl<M, T> TransformationRule for FnRule<M, T>
where
    M: Fn(&str) -> bool + Send + Sync,
    T: Fn(&str) -> String + Send + Sync,
{
    fn matches(&self, key: &str) -> bool {
        (self.matches)(key)
    }

    fn transform(&self, key: &str) -> String {
        (self.transform)(key)
    }
}

impl<M, T> fmt::Debug for FnRule<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}
