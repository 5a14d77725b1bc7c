//! Object storage trait for card images and extraction results.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{ExtractionError, Result};
use crate::types::location::ObjectLocation;

/// A bucket/key object store (S3-like).
///
/// Used both to acquire card images and to persist extraction results.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object. Returns `None` when the key does not exist.
    async fn get_object(&self, location: &ObjectLocation) -> Result<Option<Bytes>>;

    /// Store an object, replacing any existing one.
    async fn put_object(
        &self,
        location: &ObjectLocation,
        body: Bytes,
        content_type: &str,
    ) -> Result<()>;

    /// Whether a bucket exists and is reachable.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Fetch an object that must exist.
    async fn require_object(&self, location: &ObjectLocation) -> Result<Bytes> {
        self.get_object(location)
            .await?
            .ok_or_else(|| ExtractionError::NotFound {
                bucket: location.bucket.clone(),
                key: location.key.clone(),
            })
    }
}
