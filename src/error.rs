//! # Error Handling
//!
//! This module defines the centralized error type for `context-graph`. It uses
//! the `thiserror` library to describe every failure the crate can report.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all possible errors. Every variant is a
//!   configuration problem: an invalid tokenizer pattern, a capture group the
//!   pattern does not define, or a configuration document that cannot be read
//!   or parsed.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Building a graph never fails once a `GraphBuilder` exists, because the
//! extraction configuration is validated when it is constructed. Absent input
//! is not an error either; it simply produces an empty graph.

use thiserror::Error;

/// Main error type for context-graph operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration document was malformed or semantically invalid.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A tokenizer or transformation pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    InvalidPattern {
        pattern: String,
        message: String,
        hint: Option<String>,
    },

    /// The configured capture group does not exist in the tokenizer pattern.
    ///
    /// `available` counts the explicit groups, so valid indices are
    /// `0..=available`.
    #[error("Capture group {group} is out of range for pattern '{pattern}' ({available} group(s) defined)")]
    CaptureGroupOutOfRange {
        pattern: String,
        group: usize,
        available: usize,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
