// Business Card Extraction - API Core
//
// HTTP service that reads card photos from object storage, extracts the
// contact details with a vision model and stores the result next to the
// images.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
