//! Vision model trait - the collaborator that reads card images.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::image::CardImage;

/// A vision-language model that answers a prompt about images.
///
/// Implementations wrap a specific provider and return the model's raw
/// text. The text is untrusted: the pipeline parses and normalizes it.
/// Handles are constructed by the caller and passed in; nothing in the
/// library holds a global client.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Ask the model about one or more images and return its raw text.
    async fn describe(&self, prompt: &str, images: &[CardImage]) -> Result<String>;

    /// Provider and model name, for logs.
    fn name(&self) -> &str {
        "vision-model"
    }
}

#[async_trait]
impl<T: VisionModel + ?Sized> VisionModel for std::sync::Arc<T> {
    async fn describe(&self, prompt: &str, images: &[CardImage]) -> Result<String> {
        (**self).describe(prompt, images).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
