//! # Graph Builder
//!
//! Turns property sets into a directed dependency graph. Given
//!
//! ```text
//! major.version=1
//! minor.version=0
//! build.version.format=${major.version}.${minor.version}
//! build.message.format=Build ${build.version}
//! ```
//!
//! the builder records that `build.version.format` depends on
//! `major.version` and `minor.version`, and that `build.message.format`
//! depends on `build.version`. With a [`SuffixRule`](crate::transform::SuffixRule)
//! for `.format` it also records that `build.version` depends on
//! `build.version.format`, since resolving the template is what produces
//! `build.version`.
//!
//! ## Process
//!
//! 1.  **Flatten**: every entry of every property set becomes one record,
//!     keys repeated across sets included.
//! 2.  **Extract**: each value is scanned for references.
//! 3.  **Derive**: if a rule is configured, each matching key adds a record
//!     `derived -> {template key}`. Derived records follow the extracted ones.
//! 4.  **Link**: every record contributes one edge per dependency. The sink
//!     merges records sharing a key.

use std::sync::Arc;

use log::{debug, trace};

use crate::error::Result;
use crate::extraction::ExtractionOptions;
use crate::graph::{ContextGraph, DependencySink};
use crate::property::{DependencyRecord, PropertyEntry, PropertySet};
use crate::transform::TransformationRule;

/// Builds [`ContextGraph`]s from property sets.
///
/// The builder is immutable once configured; clones share the same rule.
#[derive(Clone)]
pub struct GraphBuilder {
    options: ExtractionOptions,
    rule: Option<Arc<dyn TransformationRule>>,
}

impl GraphBuilder {
    /// Builder without a transformation rule.
    pub fn new(options: ExtractionOptions) -> Self {
        Self {
            options,
            rule: None,
        }
    }

    /// Builder for `pattern`, reading the referenced key from `group`.
    pub fn from_pattern(pattern: &str, group: usize) -> Result<Self> {
        Ok(Self::new(ExtractionOptions::new(pattern, group)?))
    }

    /// Set the rule that links derived keys to their template keys.
    pub fn with_rule(self, rule: impl TransformationRule + 'static) -> Self {
        self.with_shared_rule(Arc::new(rule))
    }

    /// Same as [`with_rule`](Self::with_rule) for a rule shared with other builders.
    pub fn with_shared_rule(mut self, rule: Arc<dyn TransformationRule>) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    pub fn has_rule(&self) -> bool {
        self.rule.is_some()
    }

    /// Build a fresh graph from `property_sets`.
    ///
    /// No property sets yields an empty graph.
    pub fn build<'a, I>(&self, property_sets: I) -> ContextGraph
    where
        I: IntoIterator<Item = &'a PropertySet>,
    {
        let mut graph = ContextGraph::new();
        self.build_into(property_sets, &mut graph);
        graph
    }

    /// Add the edges for `property_sets` to an existing sink.
    pub fn build_into<'a, I, S>(&self, property_sets: I, sink: &mut S)
    where
        I: IntoIterator<Item = &'a PropertySet>,
        S: DependencySink + ?Sized,
    {
        let records = self.dependency_records(property_sets);

        let mut edges = 0;
        for record in &records {
            for dependency in record.depends_on() {
                sink.add_edge(record.key(), dependency);
                edges += 1;
            }
        }

        debug!(
            "linked {} dependency records into {} edges",
            records.len(),
            edges
        );
    }

    /// The records the graph is built from: one per property entry, in input
    /// order, followed by one per derived key.
    pub fn dependency_records<'a, I>(&self, property_sets: I) -> Vec<DependencyRecord>
    where
        I: IntoIterator<Item = &'a PropertySet>,
    {
        let entries = flatten(property_sets);
        let mut records = self.link(&entries);

        if let Some(rule) = &self.rule {
            let derived = derive(&**rule, &entries);
            debug!("transformation rule derived {} keys", derived.len());
            records.extend(derived);
        }

        records
    }

    fn link(&self, entries: &[PropertyEntry<'_>]) -> Vec<DependencyRecord> {
        entries
            .iter()
            .map(|entry| {
                let depends_on = self.options.extract(entry.value());
                DependencyRecord::with_dependencies(entry.key(), depends_on)
            })
            .collect()
    }
}

impl Default for GraphBuilder {
    /// `${key}` placeholders and no transformation rule.
    fn default() -> Self {
        Self::new(ExtractionOptions::default())
    }
}

impl std::fmt::Debug for GraphBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphBuilder")
            .field("options", &self.options)
            .field("has_rule", &self.rule.is_some())
            .finish()
    }
}

/// Collect every entry of every set, keeping keys that repeat across sets.
fn flatten<'a, I>(property_sets: I) -> Vec<PropertyEntry<'a>>
where
    I: IntoIterator<Item = &'a PropertySet>,
{
    property_sets
        .into_iter()
        .flat_map(|set| set.iter())
        .collect()
}

fn derive(rule: &dyn TransformationRule, entries: &[PropertyEntry<'_>]) -> Vec<DependencyRecord> {
    entries
        .iter()
        .filter(|entry| rule.matches(entry.key()))
        .map(|entry| {
            let derived = rule.transform(entry.key());
            trace!("{} is produced by {}", derived, entry.key());
            DependencyRecord::new(derived).with_dependency(entry.key())
        })
        .collect()
}
