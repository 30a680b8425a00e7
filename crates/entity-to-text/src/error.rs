//! Extraction error types.

use thiserror::Error;

/// Errors that can occur while turning content into plain text.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The field type registry failed to answer a lookup.
    ///
    /// Missing and empty fields are not errors; this covers a registry
    /// that fails outright instead of answering that it has no entry.
    #[error("Field type lookup failed for '{field_type}': {message}")]
    FieldTypeLookup {
        /// Field type that was being resolved.
        field_type: String,
        /// Host-provided failure detail.
        message: String,
    },

    /// The renderer failed to produce output.
    #[error("Render failed: {0}")]
    Render(String),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
