//! The card extractor - runs the pipeline for one card.
//!
//! model text → JSON → canonical record (per image) → merge → emptiness check

use futures::future::try_join_all;
use tracing::{debug, info, warn};

use super::emptiness::is_empty_extraction;
use super::merge::merge_sides;
use super::normalize::normalize_record;
use super::parse::{parse_response, truncate_to_char_boundary};
use super::prompts::CARD_EXTRACTION_PROMPT;
use crate::error::{ExtractionError, Result};
use crate::traits::vision::VisionModel;
use crate::types::{
    config::ExtractorConfig,
    extraction::{CardExtraction, ExtractionWarning},
    image::CardImage,
    record::CardRecord,
};

/// Parse and normalize one raw model response.
pub fn record_from_response(response: &str) -> Result<CardRecord> {
    normalize_record(&parse_response(response)?)
}

/// Extracts one card record from one or two card images.
///
/// The vision model is passed in at construction; the extractor holds no
/// other state and can be shared across requests.
pub struct CardExtractor<V: VisionModel> {
    model: V,
    config: ExtractorConfig,
    prompt: String,
}

impl<V: VisionModel> CardExtractor<V> {
    /// Create an extractor with the default config and prompt.
    pub fn new(model: V) -> Self {
        Self {
            model,
            config: ExtractorConfig::default(),
            prompt: CARD_EXTRACTION_PROMPT.to_string(),
        }
    }

    /// Set the extractor config.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the prompt sent with each image.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The underlying vision model.
    pub fn model(&self) -> &V {
        &self.model
    }

    /// Extract a card from one or two images (front and back).
    ///
    /// The model is asked about each image separately; the two records are
    /// merged afterwards.
    pub async fn extract(&self, images: &[CardImage]) -> Result<CardExtraction> {
        check_image_count(images.len())?;

        info!(
            model = self.model.name(),
            images = images.len(),
            "Extracting card"
        );

        let responses = if self.config.concurrent_model_calls {
            try_join_all(images.iter().map(|image| self.describe(image))).await?
        } else {
            let mut responses = Vec::with_capacity(images.len());
            for image in images {
                responses.push(self.describe(image).await?);
            }
            responses
        };

        let records = responses
            .iter()
            .zip(images)
            .map(|(response, image)| self.record_for(response, image.label()))
            .collect::<Result<Vec<_>>>()?;

        self.finish(&records)
    }

    /// Run the pipeline on raw model responses, one per card side.
    pub fn extract_from_text(&self, responses: &[&str]) -> Result<CardExtraction> {
        check_image_count(responses.len())?;

        let records = responses
            .iter()
            .enumerate()
            .map(|(i, response)| self.record_for(response, &format!("response {}", i + 1)))
            .collect::<Result<Vec<_>>>()?;

        self.finish(&records)
    }

    async fn describe(&self, image: &CardImage) -> Result<String> {
        let start = std::time::Instant::now();
        let response = self
            .model
            .describe(&self.prompt, std::slice::from_ref(image))
            .await?;

        debug!(
            source = image.label(),
            response_len = response.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Vision model responded"
        );
        Ok(response)
    }

    fn record_for(&self, response: &str, source: &str) -> Result<CardRecord> {
        record_from_response(response).inspect_err(|e| match e {
            ExtractionError::MalformedResponse { raw, source: err } => warn!(
                source,
                error = %err,
                raw = truncate_to_char_boundary(raw, self.config.max_logged_response_bytes),
                "Failed to parse model response as JSON"
            ),
            other => warn!(source, error = %other, "Model response is not a card record"),
        })
    }

    fn finish(&self, records: &[CardRecord]) -> Result<CardExtraction> {
        let outcome = merge_sides(records)?;
        let mut extraction = CardExtraction::new(outcome.record);

        if self.config.warn_on_company_mismatch {
            if let Some(mismatch) = outcome.company_mismatch {
                extraction
                    .warnings
                    .push(ExtractionWarning::CompanyMismatch(mismatch));
            }
        }

        if is_empty_extraction(&extraction.record) {
            extraction.warnings.push(ExtractionWarning::NotACard);
        }

        for warning in &extraction.warnings {
            warn!(%warning, "Extraction warning");
        }

        Ok(extraction)
    }
}

fn check_image_count(count: usize) -> Result<()> {
    if (1..=2).contains(&count) {
        Ok(())
    } else {
        Err(ExtractionError::InvalidImageCount { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockVision;

    const FRONT: &str = r#"```json
{"company_name": "Acme Corp", "company_quote": "Best Widgets", "person_name": "Jane Doe",
 "contact_numbers": ["+1-555-1111"], "category": ["Manufacturing"]}
```"#;

    const BACK: &str = r#"{"company_name": ["acme corp"], "contact_numbers": "+1-555-1111",
 "email_addresses": "jane@acme.com", "social_media_profiles": {"linkedin": "https://linkedin.com/in/jane"}}"#;

    fn image(name: &str) -> CardImage {
        CardImage::new(vec![0u8; 4], "image/jpeg").with_source(name)
    }

    #[tokio::test]
    async fn test_extract_single_image() {
        let model = MockVision::new().with_response("front.jpg", FRONT);
        let extractor = CardExtractor::new(model);

        let extraction = extractor.extract(&[image("front.jpg")]).await.unwrap();

        assert_eq!(
            extraction.record.company_name,
            Some(vec!["Acme Corp\nBest Widgets".to_string()])
        );
        assert_eq!(extraction.record.category.as_deref(), Some("Manufacturing"));
        assert!(extraction.warnings.is_empty());
        assert_eq!(extractor.model().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_extract_two_images_calls_model_per_image() {
        let model = MockVision::new()
            .with_response("front.jpg", FRONT)
            .with_response("back.jpg", BACK);
        let extractor = CardExtractor::new(model).with_config(ExtractorConfig::default().sequential());

        let extraction = extractor
            .extract(&[image("front.jpg"), image("back.jpg")])
            .await
            .unwrap();

        let calls = extractor.model().calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.image_count == 1));
        assert_eq!(calls[0].sources, vec!["front.jpg".to_string()]);

        let record = extraction.record;
        assert_eq!(record.contact_numbers, Some(vec!["+1-555-1111".to_string()]));
        assert_eq!(record.email_addresses, Some(vec!["jane@acme.com".to_string()]));
        assert_eq!(
            record.company_name,
            Some(vec!["Acme Corp\nBest Widgets".to_string(), "acme corp".to_string()])
        );
        assert!(record.social_media_profiles.linkedin.is_some());
    }

    #[tokio::test]
    async fn test_extract_rejects_bad_image_count() {
        let extractor = CardExtractor::new(MockVision::new());

        let err = extractor.extract(&[]).await.unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidImageCount { count: 0 }));

        let three = [image("a"), image("b"), image("c")];
        let err = extractor.extract(&three).await.unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidImageCount { count: 3 }));
        assert!(extractor.model().calls().is_empty());
    }

    #[tokio::test]
    async fn test_extract_surfaces_malformed_response() {
        let model = MockVision::new().with_response("front.jpg", "I can't help with that.");
        let extractor = CardExtractor::new(model);

        let err = extractor.extract(&[image("front.jpg")]).await.unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedResponse { .. }));
    }

    #[test]
    fn test_extract_from_text_not_a_card() {
        let extractor = CardExtractor::new(MockVision::new());
        let empty = r#"{"company_name": null, "person_name": null, "social_media_profiles": null}"#;

        let extraction = extractor.extract_from_text(&[empty, empty]).unwrap();

        assert_eq!(extraction.record, CardRecord::default());
        assert_eq!(extraction.warnings, vec![ExtractionWarning::NotACard]);
    }

    #[test]
    fn test_company_mismatch_warning_can_be_disabled() {
        let left = r#"{"company_name": "Acme Corp"}"#;
        let right = r#"{"company_name": "Globex Inc"}"#;

        let extractor = CardExtractor::new(MockVision::new());
        let extraction = extractor.extract_from_text(&[left, right]).unwrap();
        assert!(matches!(
            extraction.warnings.as_slice(),
            [ExtractionWarning::CompanyMismatch(_)]
        ));

        let quiet = CardExtractor::new(MockVision::new()).with_config(ExtractorConfig {
            warn_on_company_mismatch: false,
            ..Default::default()
        });
        assert!(quiet.extract_from_text(&[left, right]).unwrap().warnings.is_empty());
    }
}
