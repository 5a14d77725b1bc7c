//! Server dependencies (using traits for testability)
//!
//! The vision model and the object store are trait objects so tests can
//! swap in `MockVision` and `MemoryObjectStore`.

use std::sync::Arc;

use card_extraction::{CardExtractor, ExtractorConfig, ObjectStore, VisionModel};

/// Extractor over a shared, type-erased vision model
pub type SharedExtractor = CardExtractor<Arc<dyn VisionModel>>;

/// Server dependencies accessible to route handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub extractor: Arc<SharedExtractor>,
    pub store: Arc<dyn ObjectStore>,
    /// Bucket used when a request does not name one
    pub default_bucket: String,
}

impl ServerDeps {
    pub fn new(
        vision: Arc<dyn VisionModel>,
        store: Arc<dyn ObjectStore>,
        default_bucket: impl Into<String>,
    ) -> Self {
        Self::with_config(vision, store, default_bucket, ExtractorConfig::default())
    }

    pub fn with_config(
        vision: Arc<dyn VisionModel>,
        store: Arc<dyn ObjectStore>,
        default_bucket: impl Into<String>,
        config: ExtractorConfig,
    ) -> Self {
        Self {
            extractor: Arc::new(CardExtractor::new(vision).with_config(config)),
            store,
            default_bucket: default_bucket.into(),
        }
    }
}
