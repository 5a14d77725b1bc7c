//! In-memory object store for testing and development.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::Result;
use crate::traits::store::ObjectStore;
use crate::types::location::ObjectLocation;

/// In-memory bucket/key storage.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart.
pub struct MemoryObjectStore {
    buckets: RwLock<HashSet<String>>,
    objects: RwLock<HashMap<ObjectLocation, StoredObject>>,
}

/// An object body with its content type.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: String,
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryObjectStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(HashSet::new()),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Create a bucket.
    pub fn with_bucket(self, bucket: impl Into<String>) -> Self {
        self.buckets.write().unwrap().insert(bucket.into());
        self
    }

    /// Add an object, creating its bucket.
    pub fn with_object(
        self,
        location: ObjectLocation,
        body: impl Into<Bytes>,
        content_type: impl Into<String>,
    ) -> Self {
        self.buckets.write().unwrap().insert(location.bucket.clone());
        self.objects.write().unwrap().insert(
            location,
            StoredObject {
                body: body.into(),
                content_type: content_type.into(),
            },
        );
        self
    }

    /// Look up a stored object with its content type.
    pub fn object(&self, location: &ObjectLocation) -> Option<StoredObject> {
        self.objects.read().unwrap().get(location).cloned()
    }

    /// Get the number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.read().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Option<Bytes>> {
        Ok(self.object(location).map(|o| o.body))
    }

    async fn put_object(
        &self,
        location: &ObjectLocation,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        self.buckets
            .write()
            .unwrap()
            .insert(location.bucket.clone());
        self.objects.write().unwrap().insert(
            location.clone(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        Ok(self.buckets.read().unwrap().contains(bucket))
    }
}
