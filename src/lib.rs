//! # Context Graph Library
//!
//! This library builds a directed dependency graph over key/value properties
//! whose values reference other keys. A build-version string composed from
//! major/minor/patch keys depends on those keys; the graph captures these
//! "must resolve before" relationships so that a resolver can compute an
//! evaluation order or report circular references.
//!
//! ## Quick Example
//!
//! ```
//! use context_graph::builder::GraphBuilder;
//! use context_graph::property::PropertySet;
//! use context_graph::transform::SuffixRule;
//!
//! let properties = PropertySet::from([
//!     ("major.version", "1"),
//!     ("minor.version", "0"),
//!     ("build.version.format", "${major.version}.${minor.version}"),
//!     ("build.message.format", "Build ${build.version}"),
//! ]);
//!
//! let builder = GraphBuilder::default().with_rule(SuffixRule::default());
//! let graph = builder.build([&properties]);
//!
//! assert!(graph.contains_edge("build.version.format", "major.version"));
//! assert!(graph.contains_edge("build.version", "build.version.format"));
//! assert!(graph.contains_edge("build.message.format", "build.version"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Extraction (`extraction`)**: a regex and capture group that find key
//!   references inside a value.
//! - **Transformation rules (`transform`)**: pluggable predicate and mapping
//!   linking a derived key to the template key that produces it.
//! - **Builder (`builder`)**: flattens property sets into dependency records
//!   and pushes their edges into a graph.
//! - **Graph (`graph`)**: the `DependencySink` capability and the default
//!   `ContextGraph` that accumulates edges.
//! - **Configuration (`config`)**: YAML description of a builder.
//!
//! Evaluating values, ordering keys and detecting cycles are left to the
//! consumer of the graph.

pub mod builder;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extraction;
pub mod graph;
pub mod property;
pub mod suggestions;
pub mod transform;

pub use builder::GraphBuilder;
pub use error::{Error, Result};
pub use graph::{ContextGraph, DependencySink};
pub use property::PropertySet;

#[cfg(test)]
mod builder_proptest;
