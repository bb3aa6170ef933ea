//! Error types for document decoding, validation, and value access.

use thiserror::Error;

/// Errors produced by the document model and parser.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text was not well-formed JSON.
    /// serde_json's message carries the line and column of the defect.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree does not have the shape the format requires: the top-level
    /// key is missing, or a reserved field holds the wrong kind of node.
    #[error("document error: {0}")]
    Parse(String),

    /// A structural rule was violated after decode.
    #[error("validation error: {0}")]
    Validation(String),

    /// [`Item::fill_template`](crate::Item::fill_template) could not resolve
    /// every template property against the item's data. Carries every name
    /// that had no match.
    #[error("item has no property named: {}", .missing.join(", "))]
    MissingTemplateData { missing: Vec<String> },

    /// A [`Value`](crate::Value) was accessed as a variant it does not hold.
    #[error("expected a {expected} value, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
