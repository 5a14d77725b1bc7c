use card_extraction::ExtractionError;
use thiserror::Error;

/// Errors returned by the card actions
#[derive(Error, Debug)]
pub enum CardError {
    /// The request itself is unusable (missing or too many image URLs, bad body)
    #[error("{0}")]
    Validation(String),

    #[error("Extraction result not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl CardError {
    /// Whether the caller can fix the request (as opposed to a collaborator failure)
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NotFound(_) => true,
            Self::Extraction(e) => e.is_client_error(),
        }
    }
}
