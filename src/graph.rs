//! # Dependency Graph
//!
//! The builder only needs one capability from its output: recording that one
//! key depends on another. That capability is the [`DependencySink`] trait,
//! so any graph type (a petgraph wrapper, a resolver with cycle detection)
//! can be populated directly.
//!
//! [`ContextGraph`] is the sink returned by `GraphBuilder::build`. It keeps,
//! for every dependent key, the set of keys it depends on. Adding edges is
//! cumulative: repeated calls for the same key union their dependencies and
//! never replace earlier ones. Ordering and cycle detection are left to the
//! consumer of the graph.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything that can accumulate "`dependent` must resolve after `dependency`" edges.
///
/// Implementations must be idempotent for repeated pairs and must merge,
/// not overwrite, edges added for the same dependent.
pub trait DependencySink {
    fn add_edge(&mut self, dependent: &str, dependency: &str);
}

impl<S: DependencySink + ?Sized> DependencySink for &mut S {
    fn add_edge(&mut self, dependent: &str, dependency: &str) {
        (**self).add_edge(dependent, dependency)
    }
}

/// Directed graph of property keys, stored as adjacency sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextGraph {
    dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl ContextGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys `dependent` depends on, or `None` if it has no outgoing edges.
    pub fn dependencies_of(&self, dependent: &str) -> Option<&BTreeSet<String>> {
        self.dependencies.get(dependent)
    }

    pub fn contains_edge(&self, dependent: &str, dependency: &str) -> bool {
        self.dependencies
            .get(dependent)
            .is_some_and(|deps| deps.contains(dependency))
    }

    /// Keys with at least one outgoing edge, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    /// All `(dependent, dependency)` pairs, sorted.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dependencies.iter().flat_map(|(dependent, deps)| {
            deps.iter()
                .map(move |dependency| (dependent.as_str(), dependency.as_str()))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl DependencySink for ContextGraph {
    fn add_edge(&mut self, dependent: &str, dependency: &str) {
        self.dependencies
            .entry(dependent.to_string())
            .or_default()
            .insert(dependency.to_string());
    }
}

impl fmt::Display for ContextGraph {
    /// One `dependent -> dependency` line per edge.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dependent, dependency) in self.edges() {
            writeln!(f, "{} -> {}", dependent, dependency)?;
        }
        Ok(())
    }
}
