//! Typed errors for the card extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Only structural failures are errors here. A field with the wrong shape
//! is normalized to `null`, never reported.

use thiserror::Error;

/// Errors that can occur while extracting a card record.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Model text was not valid JSON after stripping code fences
    #[error("malformed model response: {source}")]
    MalformedResponse {
        /// The text that failed to parse, kept for diagnostics
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// Parsed JSON is not an object at the top level
    #[error("invalid record shape: expected a JSON object, found {found}")]
    InvalidRecordShape { found: &'static str },

    /// Extraction requires one or two card images
    #[error("invalid number of images: expected 1 or 2, got {count}")]
    InvalidImageCount { count: usize },

    /// Vision model call failed
    #[error("vision model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Object store operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Object not found in the store
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    /// Image URL could not be resolved to a bucket and key
    #[error("invalid object location {url}: {reason}")]
    InvalidLocation { url: String, reason: String },

    /// Serializing a record for storage failed
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ExtractionError {
    /// Whether the error was caused by the caller's input rather than a
    /// collaborator failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedResponse { .. }
                | Self::InvalidRecordShape { .. }
                | Self::InvalidImageCount { .. }
                | Self::InvalidLocation { .. }
                | Self::NotFound { .. }
        )
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
