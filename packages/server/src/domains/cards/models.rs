use card_extraction::{CardRecord, RecordIds};
use serde::{Deserialize, Serialize};

/// Body of `POST /info`
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionRequest {
    /// One or two object-storage URLs: the card's front and, optionally, its back
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,

    /// Store the result next to the first image (default: true)
    #[serde(default = "default_upload_results")]
    pub upload_results: bool,
}

fn default_upload_results() -> bool {
    true
}

impl ExtractionRequest {
    pub fn new(image_urls: Vec<String>) -> Self {
        Self {
            image_urls: Some(image_urls),
            upload_results: true,
        }
    }

    pub fn without_upload(mut self) -> Self {
        self.upload_results = false;
        self
    }
}

/// The extracted record plus the identifiers taken from the image key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardResult {
    #[serde(flatten)]
    pub record: CardRecord,

    #[serde(flatten)]
    pub ids: RecordIds,
}

/// Response of `POST /info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub success: bool,
    pub data: CardResult,
    /// Key of the stored `extraction_result.json`, when it was uploaded
    #[serde(rename = "s3_result_key")]
    pub result_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Response of `GET /info/{key}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResult {
    pub success: bool,
    pub data: serde_json::Value,
    #[serde(rename = "s3_key")]
    pub key: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
