//! Integration tests for the card pipeline.
//!
//! These drive the extractor end to end through the mock vision model:
//! 1. Model text is fence-stripped and parsed
//! 2. Each side is normalized
//! 3. Two sides are merged
//! 4. Warnings are attached

use card_extraction::{
    testing::{MockVision, EMPTY_CARD_RESPONSE},
    CardExtractor, CardImage, ExtractionError, ExtractionWarning, ExtractorConfig,
    MemoryObjectStore, ObjectLocation, ObjectStore,
};

/// Helper to create a card side with a source label.
fn side(source: &str) -> CardImage {
    CardImage::new(vec![0xFFu8, 0xD8, 0xFF], "image/jpeg").with_source(source)
}

fn list(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

const FENCED_FRONT: &str = "```json\n{\"company_name\": \"Acme\\nBest Widgets\", \"company_quote\": null, \"person_name\": null, \"contact_numbers\": null, \"email_addresses\": null, \"address\": null, \"services\": null, \"website\": null, \"category\": null, \"social_media_profiles\": null}\n```";

#[tokio::test]
async fn test_fenced_response_keeps_embedded_tagline() {
    let model = MockVision::new().with_response("front.jpg", FENCED_FRONT);
    let extractor = CardExtractor::new(model);

    let extraction = extractor.extract(&[side("front.jpg")]).await.unwrap();

    assert_eq!(
        extraction.record.company_name,
        list(&["Acme\nBest Widgets"])
    );
    assert_eq!(extraction.record.person_name, None);
    assert!(extraction.warnings.is_empty());
}

#[tokio::test]
async fn test_identical_numbers_on_both_sides_merge_once() {
    let front = r#"{"company_name": "Acme", "contact_numbers": ["+1-555-1111"]}"#;
    let back = r#"{"company_name": "ACME", "contact_numbers": ["+1-555-1111"]}"#;

    let model = MockVision::new()
        .with_response("front.jpg", front)
        .with_response("back.jpg", back);
    let extractor = CardExtractor::new(model);

    let extraction = extractor
        .extract(&[side("front.jpg"), side("back.jpg")])
        .await
        .unwrap();

    assert_eq!(extraction.record.contact_numbers, list(&["+1-555-1111"]));
    assert_eq!(extraction.record.company_name, list(&["Acme"]));
    assert!(extraction.warnings.is_empty());

    // One model call per side
    let calls = extractor.model().calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|call| call.image_count == 1));
}

#[tokio::test]
async fn test_all_null_sides_warn_not_a_card() {
    let extractor = CardExtractor::new(MockVision::new());

    let extraction = extractor
        .extract(&[side("cat.jpg"), side("dog.jpg")])
        .await
        .unwrap();

    assert!(extraction.is_not_a_card());
    assert_eq!(extraction.warnings, vec![ExtractionWarning::NotACard]);
    assert_eq!(
        extraction.warning_message().unwrap(),
        "Warning: No visiting card information was extracted from the image(s). \
         The uploaded image(s) may not be a visiting card."
    );

    let json = serde_json::to_value(&extraction.record).unwrap();
    assert!(json["company_name"].is_null());
    assert!(json["category"].is_null());
    assert!(json["social_media_profiles"]["linkedin"].is_null());
}

#[tokio::test]
async fn test_different_companies_union_and_warn() {
    let model = MockVision::new()
        .with_response("front.jpg", r#"{"company_name": ["Acme Corp"]}"#)
        .with_response("back.jpg", r#"{"company_name": ["Globex Inc"]}"#);
    let extractor = CardExtractor::new(model);

    let extraction = extractor
        .extract(&[side("front.jpg"), side("back.jpg")])
        .await
        .unwrap();

    assert_eq!(
        extraction.record.company_name,
        list(&["Acme Corp", "Globex Inc"])
    );

    let message = extraction.warning_message().unwrap();
    assert!(message.contains("(Acme Corp)"));
    assert!(message.contains("(Globex Inc)"));
    assert!(!extraction.is_not_a_card());
}

#[tokio::test]
async fn test_mismatch_warning_can_be_disabled() {
    let model = MockVision::new()
        .with_response("front.jpg", r#"{"company_name": "Acme Corp"}"#)
        .with_response("back.jpg", r#"{"company_name": "Globex Inc"}"#);
    let config = ExtractorConfig {
        warn_on_company_mismatch: false,
        ..Default::default()
    };
    let extractor = CardExtractor::new(model).with_config(config.sequential());

    let extraction = extractor
        .extract(&[side("front.jpg"), side("back.jpg")])
        .await
        .unwrap();

    assert!(extraction.warnings.is_empty());
}

#[tokio::test]
async fn test_garbled_side_fails_the_whole_card() {
    let model = MockVision::new()
        .with_response("front.jpg", r#"{"company_name": "Acme"}"#)
        .with_response("back.jpg", "Sorry, I can't read this card.");
    let extractor = CardExtractor::new(model);

    let err = extractor
        .extract(&[side("front.jpg"), side("back.jpg")])
        .await
        .unwrap_err();

    match err {
        ExtractionError::MalformedResponse { raw, .. } => {
            assert_eq!(raw, "Sorry, I can't read this card.")
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_model_failure_propagates() {
    let model = MockVision::new().with_failure("front.jpg");
    let extractor = CardExtractor::new(model);

    let err = extractor.extract(&[side("front.jpg")]).await.unwrap_err();

    assert!(matches!(err, ExtractionError::Model(_)));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn test_three_images_rejected_before_model_call() {
    let extractor = CardExtractor::new(MockVision::new());

    let err = extractor
        .extract(&[side("a.jpg"), side("b.jpg"), side("c.jpg")])
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::InvalidImageCount { count: 3 }));
    assert!(extractor.model().calls().is_empty());
}

#[test]
fn test_extract_from_text_matches_extract() {
    let extractor = CardExtractor::new(MockVision::new());

    let extraction = extractor
        .extract_from_text(&[
            r#"{"email_addresses": ["A@x.com", "a@x.com", " a@x.com "], "category": ["", " Legal "]}"#,
            EMPTY_CARD_RESPONSE,
        ])
        .unwrap();

    assert_eq!(extraction.record.email_addresses, list(&["A@x.com"]));
    assert_eq!(extraction.record.category.as_deref(), Some("Legal"));
}

#[tokio::test]
async fn test_images_from_store_by_url() {
    let location = ObjectLocation::parse_url(
        "https://cards.s3.us-east-1.amazonaws.com/events/ev-1/info-9/front.png",
    )
    .unwrap();
    let store = MemoryObjectStore::new()
        .with_bucket("cards")
        .with_object(location.clone(), vec![1u8, 2, 3], "image/png");

    let bytes = store.require_object(&location).await.unwrap();
    let image = CardImage::new(bytes, CardImage::media_type_for(&location.key))
        .with_source(location.to_string());

    let model = MockVision::new().with_response(
        "cards/events/ev-1/info-9/front.png",
        r#"{"person_name": "Jane Doe"}"#,
    );
    let extraction = CardExtractor::new(model).extract(&[image]).await.unwrap();

    assert_eq!(extraction.record.person_name, list(&["Jane Doe"]));

    let ids = location.record_ids();
    assert_eq!(ids.info_id.as_deref(), Some("info-9"));
    assert_eq!(ids.event_id.as_deref(), Some("ev-1"));
    assert_eq!(
        location.result_location().key,
        "events/ev-1/info-9/extraction_result.json"
    );
}
