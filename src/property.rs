//! Property sets and the intermediate records derived from them.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// A flat mapping of property keys to raw values, supplied as one unit of input.
///
/// Keys are unique within a set. The same key may appear in several sets;
/// each occurrence contributes its own dependencies to the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = PropertyEntry<'_>> {
        self.entries
            .iter()
            .map(|(key, value)| PropertyEntry { key, value })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for PropertySet {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for PropertySet {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl From<HashMap<String, String>> for PropertySet {
    fn from(entries: HashMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}

/// One (key, raw value) pair borrowed from a [`PropertySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEntry<'a> {
    key: &'a str,
    value: &'a str,
}

impl<'a> PropertyEntry<'a> {
    pub fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn value(&self) -> &'a str {
        self.value
    }
}

/// A key together with the keys it must be resolved after.
///
/// Records are transient: the builder turns each one into graph edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    key: String,
    depends_on: BTreeSet<String>,
}

impl DependencyRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            depends_on: BTreeSet::new(),
        }
    }

    pub fn with_dependencies(key: impl Into<String>, depends_on: BTreeSet<String>) -> Self {
        Self {
            key: key.into(),
            depends_on,
        }
    }

    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.depends_on.insert(dependency.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn depends_on(&self) -> &BTreeSet<String> {
        &self.depends_on
    }
}
