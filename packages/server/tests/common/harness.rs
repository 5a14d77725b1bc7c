//! Test harness for router tests.
//!
//! Builds the real router over `MockVision` and `MemoryObjectStore` and
//! drives it with `tower::ServiceExt::oneshot`; no network, no model calls.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use card_extraction::{
    testing::MockVision, ExtractionError, MemoryObjectStore, ObjectLocation, ObjectStore,
    VisionModel,
};
use card_server::{kernel::ServerDeps, server::build_app};
use serde_json::Value;
use tower::ServiceExt;

pub const BUCKET: &str = "cards";
pub const FRONT_KEY: &str = "events/ev-1/info-9/front.jpg";
pub const BACK_KEY: &str = "events/ev-1/info-9/back.png";
pub const FRONT_URL: &str = "https://cards.s3.us-east-1.amazonaws.com/events/ev-1/info-9/front.jpg";
pub const BACK_URL: &str = "https://s3.us-east-1.amazonaws.com/cards/events/ev-1/info-9/back.png";

/// Mock lookup label for a stored image (`bucket/key`)
pub fn source(key: &str) -> String {
    format!("{}/{}", BUCKET, key)
}

/// Store with the default bucket and both card sides
pub fn seeded_store() -> MemoryObjectStore {
    MemoryObjectStore::new()
        .with_bucket(BUCKET)
        .with_object(ObjectLocation::new(BUCKET, FRONT_KEY), vec![0xFFu8, 0xD8], "image/jpeg")
        .with_object(ObjectLocation::new(BUCKET, BACK_KEY), vec![0x89u8, 0x50], "image/png")
}

pub struct TestHarness {
    pub app: Router,
    pub vision: Arc<MockVision>,
}

impl TestHarness {
    pub fn new(vision: MockVision, store: Arc<dyn ObjectStore>) -> Self {
        let vision = Arc::new(vision);
        let model: Arc<dyn VisionModel> = vision.clone();
        let deps = ServerDeps::new(model, store, BUCKET);

        Self {
            app: build_app(deps, 1024 * 1024),
            vision,
        }
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}

/// Store that serves reads from an inner store and rejects every write
pub struct ReadOnlyStore(pub MemoryObjectStore);

#[async_trait]
impl ObjectStore for ReadOnlyStore {
    async fn get_object(&self, location: &ObjectLocation) -> card_extraction::Result<Option<Bytes>> {
        self.0.get_object(location).await
    }

    async fn put_object(
        &self,
        _location: &ObjectLocation,
        _body: Bytes,
        _content_type: &str,
    ) -> card_extraction::Result<()> {
        Err(ExtractionError::Storage("bucket is read-only".into()))
    }

    async fn bucket_exists(&self, bucket: &str) -> card_extraction::Result<bool> {
        self.0.bucket_exists(bucket).await
    }
}
