//! Binary document descriptors.

use serde::{Deserialize, Serialize};

/// A binary document to run through text extraction.
///
/// The `uri` is a scheme URI (`private://reports/annual.pdf`) resolved
/// through the scheme registry at extraction time; `id` and `filename`
/// together name the cache entry for the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDocument {
    /// Stable numeric identifier.
    pub id: u64,

    /// Original file name, extension included.
    pub filename: String,

    /// Scheme URI locating the bytes.
    pub uri: String,
}

impl FileDocument {
    /// Describe a document.
    pub fn new(id: u64, filename: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            uri: uri.into(),
        }
    }
}
