//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the card extraction
//! library without making real model calls.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::error::{ExtractionError, Result};
use crate::traits::vision::VisionModel;
use crate::types::image::CardImage;

/// What the model returns for an image that has no canned response: every
/// field null, as for a photo that is not a card.
pub const EMPTY_CARD_RESPONSE: &str = r#"{
  "company_name": null,
  "company_quote": null,
  "person_name": null,
  "contact_numbers": null,
  "email_addresses": null,
  "address": null,
  "services": null,
  "website": null,
  "category": null,
  "social_media_profiles": null
}"#;

/// A mock vision model for testing.
///
/// Returns canned text keyed by the image source (see
/// [`CardImage::with_source`]) and records every call.
#[derive(Default)]
pub struct MockVision {
    /// Predefined responses by image source
    responses: Arc<RwLock<HashMap<String, String>>>,

    /// Response for images without a predefined one
    fallback: Option<String>,

    /// Image sources whose calls fail
    failures: Arc<RwLock<HashSet<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockVisionCall>>>,
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub struct MockVisionCall {
    pub prompt: String,
    pub image_count: usize,
    pub sources: Vec<String>,
}

impl MockVision {
    /// Create a new mock with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined response for an image source.
    pub fn with_response(self, source: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(source.into(), response.into());
        self
    }

    /// Set the response for images without a predefined one.
    pub fn with_fallback(mut self, response: impl Into<String>) -> Self {
        self.fallback = Some(response.into());
        self
    }

    /// Make calls for an image source fail.
    pub fn with_failure(self, source: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(source.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockVisionCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl VisionModel for MockVision {
    async fn describe(&self, prompt: &str, images: &[CardImage]) -> Result<String> {
        let sources: Vec<String> = images.iter().map(|i| i.label().to_string()).collect();

        self.calls.write().unwrap().push(MockVisionCall {
            prompt: prompt.to_string(),
            image_count: images.len(),
            sources: sources.clone(),
        });

        let key = sources.first().map(String::as_str).unwrap_or_default();

        if self.failures.read().unwrap().contains(key) {
            return Err(ExtractionError::Model(
                format!("mock failure for {}", key).into(),
            ));
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(key)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or_else(|| EMPTY_CARD_RESPONSE.to_string()))
    }

    fn name(&self) -> &str {
        "mock-vision"
    }
}
