//! # Error Suggestions
//!
//! Helper functions for building configuration errors that carry a hint.
//! Errors should tell the user what went wrong AND how to fix it.

use crate::error::Error;

/// Generate an error for a pattern that failed to compile.
///
/// The hint is picked from the syntax error text, covering the two most
/// common mistakes in placeholder patterns: unescaped braces and a
/// repetition operator with nothing to repeat.
pub fn invalid_pattern(pattern: &str, error: &regex::Error) -> Error {
    let hint = match error {
        regex::Error::Syntax(msg) if msg.contains("unclosed") => {
            "Check for unclosed brackets, parentheses, or braces"
        }
        regex::Error::Syntax(msg) if msg.contains("repetition") => {
            "Repetition operators (+, *, ?) must follow a pattern; \
             escape '$', '{' and '}' with a backslash"
        }
        _ => "Test patterns at https://regex101.com (select Rust flavor)",
    };

    Error::InvalidPattern {
        pattern: pattern.to_string(),
        message: error.to_string(),
        hint: Some(hint.to_string()),
    }
}

/// Generate an error for a capture group index the pattern does not define.
pub fn capture_group_out_of_range(pattern: &str, group: usize, available: usize) -> Error {
    Error::CaptureGroupOutOfRange {
        pattern: pattern.to_string(),
        group,
        available,
    }
}

/// Generate an error for a suffix rule configured with an empty suffix.
pub fn empty_suffix() -> Error {
    Error::ConfigParse {
        message: "transformation suffix must not be empty".to_string(),
        hint: Some("Use a marker such as '.format' or remove the transformation".to_string()),
    }
}

/// Generate an error for a configuration document that failed to deserialize.
///
/// Unknown-field errors get a hint listing the recognized options.
pub fn config_parse(error: &serde_yaml::Error) -> Error {
    let message = error.to_string();
    let hint = if message.contains("unknown field") || message.contains("unknown variant") {
        Some(
            "Recognized options are tokenizer-pattern, group and transformation \
             (with either suffix, or pattern and replacement)"
                .to_string(),
        )
    } else {
        None
    };

    Error::ConfigParse { message, hint }
}
