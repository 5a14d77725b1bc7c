//! Card domain actions - business logic functions
//!
//! These actions sit between the HTTP routes and the card extraction library.

use bytes::Bytes;
use card_extraction::{CardImage, ExtractionError, ObjectLocation};
use tracing::{info, warn};

use crate::domains::cards::errors::CardError;
use crate::domains::cards::models::{
    CardResult, ExtractionRequest, ExtractionResponse, HealthStatus, StoredResult,
};
use crate::kernel::ServerDeps;

/// Most images accepted per request (front and back)
const MAX_IMAGES: usize = 2;

// =============================================================================
// Extraction
// =============================================================================

/// Extract a card from one or two stored images.
///
/// The images are read from the object store, sent to the vision model and
/// merged into one record. The record is decorated with the `info_id` and
/// `event_id` found in the first image's key and, when requested, stored as
/// `extraction_result.json` next to that image.
///
/// A failed upload does not fail the request; it is reported in the
/// response warning instead.
pub async fn process_request(
    request: ExtractionRequest,
    deps: &ServerDeps,
) -> Result<ExtractionResponse, CardError> {
    let image_urls = validate_image_urls(request.image_urls)?;

    info!(
        images = image_urls.len(),
        upload = request.upload_results,
        "Received card extraction request"
    );

    let locations = image_urls
        .iter()
        .map(|url| ObjectLocation::parse_url(url))
        .collect::<Result<Vec<_>, _>>()?;

    let mut images = Vec::with_capacity(locations.len());
    for location in &locations {
        let data = deps.store.require_object(location).await?;
        info!(bucket = %location.bucket, key = %location.key, bytes = data.len(), "Downloaded card image");
        images.push(
            CardImage::new(data, CardImage::media_type_for(&location.key))
                .with_source(location.to_string()),
        );
    }

    let extraction = deps.extractor.extract(&images).await?;
    let mut warning = extraction.warning_message();

    // Identifiers and the result location follow the first image
    let first = &locations[0];
    let data = CardResult {
        record: extraction.record,
        ids: first.record_ids(),
    };

    let mut result_key = None;
    if request.upload_results {
        let target = first.result_location();
        match upload_result(&data, &target, deps).await {
            Ok(()) => result_key = Some(target.key),
            Err(e) => {
                warn!(bucket = %target.bucket, key = %target.key, error = %e, "Failed to upload extraction result");
                warning = Some(format!(
                    "{} However, failed to upload results: {}",
                    warning.as_deref().unwrap_or("Extraction successful."),
                    e
                ));
            }
        }
    }

    info!(
        result_key = result_key.as_deref().unwrap_or("-"),
        warned = warning.is_some(),
        "Card extraction complete"
    );

    Ok(ExtractionResponse {
        success: true,
        data,
        result_key,
        warning,
    })
}

fn validate_image_urls(image_urls: Option<Vec<String>>) -> Result<Vec<String>, CardError> {
    let image_urls = image_urls
        .filter(|urls| !urls.is_empty())
        .ok_or_else(|| CardError::Validation("image_urls field is required".to_string()))?;

    if image_urls.len() > MAX_IMAGES {
        return Err(CardError::Validation(format!(
            "Maximum {} images are supported",
            MAX_IMAGES
        )));
    }

    Ok(image_urls)
}

async fn upload_result(
    data: &CardResult,
    target: &ObjectLocation,
    deps: &ServerDeps,
) -> Result<(), ExtractionError> {
    let body = serde_json::to_vec_pretty(data)?;
    deps.store
        .put_object(target, Bytes::from(body), "application/json")
        .await?;

    info!(bucket = %target.bucket, key = %target.key, "Stored extraction result");
    Ok(())
}

// =============================================================================
// Stored results
// =============================================================================

/// Fetch a previously stored extraction result by key.
///
/// Falls back to the default bucket when `bucket` is `None`.
pub async fn fetch_result(
    key: &str,
    bucket: Option<&str>,
    deps: &ServerDeps,
) -> Result<StoredResult, CardError> {
    let bucket = bucket
        .filter(|b| !b.is_empty())
        .unwrap_or(deps.default_bucket.as_str());
    let location = ObjectLocation::new(bucket, key);

    let body = deps
        .store
        .get_object(&location)
        .await?
        .ok_or_else(|| CardError::NotFound(key.to_string()))?;

    let data = serde_json::from_slice(&body).map_err(ExtractionError::from)?;

    Ok(StoredResult {
        success: true,
        data,
        key: key.to_string(),
    })
}

// =============================================================================
// Health
// =============================================================================

/// Check that the default bucket is reachable.
pub async fn check_health(deps: &ServerDeps) -> HealthStatus {
    let bucket = deps.default_bucket.clone();

    match deps.store.bucket_exists(&bucket).await {
        Ok(true) => HealthStatus {
            status: "healthy".to_string(),
            bucket,
            error: None,
        },
        Ok(false) => HealthStatus {
            status: "unhealthy".to_string(),
            error: Some(format!("bucket {} does not exist", bucket)),
            bucket,
        },
        Err(e) => HealthStatus {
            status: "unhealthy".to_string(),
            bucket,
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_urls() {
        assert!(matches!(
            validate_image_urls(None),
            Err(CardError::Validation(_))
        ));
        assert!(matches!(
            validate_image_urls(Some(vec![])),
            Err(CardError::Validation(_))
        ));

        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = validate_image_urls(Some(three)).unwrap_err();
        assert_eq!(err.to_string(), "Maximum 2 images are supported");

        let two = vec!["a".to_string(), "b".to_string()];
        assert_eq!(validate_image_urls(Some(two)).unwrap().len(), 2);
    }
}
