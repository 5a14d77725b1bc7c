//! Filesystem-backed object store.
//!
//! Buckets are directories under a root; keys are relative paths inside
//! them. Content types are not persisted.

use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::{ExtractionError, Result};
use crate::traits::store::ObjectStore;
use crate::types::location::ObjectLocation;

/// Object store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a location to a path, refusing anything that escapes its bucket.
    fn path_for(&self, location: &ObjectLocation) -> Result<PathBuf> {
        let bucket = Path::new(&location.bucket);
        let key = Path::new(&location.key);

        let is_plain = |p: &Path| {
            p.components().count() > 0 && p.components().all(|c| matches!(c, Component::Normal(_)))
        };

        if bucket.components().count() != 1 || !is_plain(bucket) || !is_plain(key) {
            return Err(ExtractionError::InvalidLocation {
                url: location.to_string(),
                reason: "bucket and key must be relative paths without '..'".to_string(),
            });
        }

        Ok(self.root.join(bucket).join(key))
    }
}

fn storage_error(e: std::io::Error) -> ExtractionError {
    ExtractionError::Storage(Box::new(e))
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Option<Bytes>> {
        let path = self.path_for(location)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn put_object(
        &self,
        location: &ObjectLocation,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        let path = self.path_for(location)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(storage_error)?;
        }
        tokio::fs::write(&path, &body).await.map_err(storage_error)?;

        debug!(
            path = %path.display(),
            bytes = body.len(),
            content_type,
            "Stored object"
        );
        Ok(())
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match tokio::fs::metadata(self.root.join(bucket)).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(storage_error(e)),
        }
    }
}
