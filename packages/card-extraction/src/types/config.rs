//! Configuration for the card extractor.

use serde::{Deserialize, Serialize};

/// Configuration for [`CardExtractor`](crate::pipeline::CardExtractor).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Issue the per-image model calls concurrently.
    ///
    /// Each image is still parsed and normalized on its own before the
    /// merge, so this only affects latency. Default: true.
    pub concurrent_model_calls: bool,

    /// Upper bound on how much raw model text is logged when a response
    /// fails to parse. Default: 2000 bytes.
    pub max_logged_response_bytes: usize,

    /// Surface a warning when the two card sides disagree on the company.
    ///
    /// Default: true.
    pub warn_on_company_mismatch: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            concurrent_model_calls: true,
            max_logged_response_bytes: 2000,
            warn_on_company_mismatch: true,
        }
    }
}

impl ExtractorConfig {
    /// Call the model for each image one after another.
    pub fn sequential(mut self) -> Self {
        self.concurrent_model_calls = false;
        self
    }
}
