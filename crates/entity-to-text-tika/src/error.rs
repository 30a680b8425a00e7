//! Tika extraction and cache error types.

use thiserror::Error;

/// Errors from the Tika client, the extractor, and the text cache.
#[derive(Error, Debug)]
pub enum TikaError {
    /// Host and port do not form a usable HTTP endpoint.
    #[error("Invalid Tika endpoint '{endpoint}': {source}")]
    Endpoint {
        /// The endpoint that failed to parse.
        endpoint: String,
        /// Parser failure detail.
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure talking to the server.
    #[error("Tika request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Tika server returned {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Settings file could not be read as settings.
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// A destination URI carries no scheme prefix.
    #[error("Destination '{uri}' has no storage scheme")]
    MissingScheme {
        /// The offending URI.
        uri: String,
    },

    /// A destination URI names a scheme with no registered mount.
    #[error("Scheme '{scheme}' in '{uri}' is not a registered storage scheme")]
    InvalidScheme {
        /// Scheme that failed the check.
        scheme: String,
        /// The offending URI.
        uri: String,
    },

    /// A destination URI did not resolve to an existing directory.
    #[error("Resolved path for '{uri}' is not a valid directory")]
    UnresolvedRoot {
        /// The offending URI.
        uri: String,
    },

    /// IO error reading a document or touching the cache.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Tika operations.
pub type TikaResult<T> = Result<T, TikaError>;
