//! Error types for the adapter.

use thiserror::Error;

/// Every failure the adapter can report. All of them end the session.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// I/O error on the pipe.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The length line is not a non-negative integer.
    #[error("malformed length line: {0:?}")]
    MalformedLength(String),

    /// The stream closed before the declared body arrived.
    #[error("truncated body: expected {expected} bytes, got {received}")]
    TruncatedBody { expected: usize, received: usize },

    /// Declared body length is above the configured cap.
    #[error("message of {len} bytes exceeds limit of {max} bytes")]
    MessageTooLarge { len: usize, max: usize },

    /// Body is not valid JSON, or a reply failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request has no string `method` field.
    #[error("missing method field")]
    MissingMethod,

    /// Request lacks the fields an operation reads.
    #[error("invalid params for {method}: {source}")]
    InvalidParams {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A distance field is neither empty nor a decimal number.
    #[error("invalid distance: {0:?}")]
    InvalidDistance(String),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
