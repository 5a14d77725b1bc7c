//! OpenAI implementation of the VisionModel trait.
//!
//! A reference implementation using a GPT-4o class model with image input.
//!
//! # Example
//!
//! ```rust,ignore
//! use card_extraction::ai::OpenAIVision;
//!
//! let model = OpenAIVision::new("sk-...").with_model("gpt-4o-mini");
//! let extractor = CardExtractor::new(model);
//! ```

use async_trait::async_trait;
use openai_client::{ChatRequest, ContentPart, Message, OpenAIClient};

use crate::error::{ExtractionError, Result};
use crate::traits::vision::VisionModel;
use crate::types::image::CardImage;

/// OpenAI-based vision model.
#[derive(Clone)]
pub struct OpenAIVision {
    client: OpenAIClient,
    model: String,
    max_tokens: u32,
}

impl OpenAIVision {
    /// Create a new vision model with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_client(OpenAIClient::new(api_key))
    }

    /// Wrap an existing client.
    pub fn from_client(client: OpenAIClient) -> Self {
        Self {
            client,
            model: "gpt-4o".to_string(),
            max_tokens: 2048,
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = OpenAIClient::from_env().map_err(|e| ExtractionError::Model(Box::new(e)))?;
        Ok(Self::from_client(client))
    }

    /// Set the chat model (default: gpt-4o).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    /// Set the completion token limit (default: 2048).
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn request(&self, prompt: &str, images: &[CardImage]) -> ChatRequest {
        let mut parts = Vec::with_capacity(images.len() + 1);
        parts.push(ContentPart::text(prompt));
        parts.extend(
            images
                .iter()
                .map(|image| ContentPart::image_bytes(&image.data, &image.media_type)),
        );

        ChatRequest::new(&self.model)
            .message(Message::user_parts(parts))
            .temperature(0.0)
            .token_limit(self.max_tokens)
    }
}

#[async_trait]
impl VisionModel for OpenAIVision {
    async fn describe(&self, prompt: &str, images: &[CardImage]) -> Result<String> {
        let response = self
            .client
            .chat_completion(self.request(prompt, images))
            .await
            .map_err(|e| ExtractionError::Model(Box::new(e)))?;

        Ok(response.content.trim().to_string())
    }

    fn name(&self) -> &str {
        &self.model
    }
}
