//! Card images handed to the vision model.

use bytes::Bytes;

/// One photographed side of a business card.
///
/// The library never decodes the image; it forwards the encoded bytes and
/// their media type to the [`VisionModel`](crate::traits::vision::VisionModel).
#[derive(Debug, Clone)]
pub struct CardImage {
    /// Encoded image bytes (JPEG, PNG, WebP, HEIC, ...)
    pub data: Bytes,

    /// Media type, e.g. `image/jpeg`
    pub media_type: String,

    /// Where the image came from (URL or object key), for logging
    pub source: Option<String>,
}

impl CardImage {
    /// Create an image from raw bytes and a media type.
    pub fn new(data: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            media_type: media_type.into(),
            source: None,
        }
    }

    /// Record where the image came from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Label used in logs and mock lookups.
    pub fn label(&self) -> &str {
        self.source.as_deref().unwrap_or("<inline>")
    }

    /// Guess a media type from a file name or object key.
    pub fn media_type_for(key: &str) -> &'static str {
        let ext = key
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => "image/png",
            "webp" => "image/webp",
            "heic" => "image/heic",
            "heif" => "image/heif",
            "gif" => "image/gif",
            _ => "image/jpeg",
        }
    }
}
