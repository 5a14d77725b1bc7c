pub mod actions;
pub mod errors;
pub mod models;

// Re-export commonly used types
pub use actions::{check_health, fetch_result, process_request};
pub use errors::CardError;
pub use models::{
    CardResult, ExtractionRequest, ExtractionResponse, HealthStatus, StoredResult,
};
