//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Extension, Request},
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use card_extraction::{LocalObjectStore, OpenAIVision, ObjectStore, VisionModel};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::routes::{extract_info_handler, get_info_handler, health_handler};

/// Upper bound for one request, model calls included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build production dependencies from configuration
pub fn build_deps(config: &Config) -> ServerDeps {
    let vision: Arc<dyn VisionModel> = Arc::new(
        OpenAIVision::new(config.openai_api_key.clone()).with_model(config.openai_model.clone()),
    );
    let store: Arc<dyn ObjectStore> = Arc::new(LocalObjectStore::new(config.storage_root.clone()));

    ServerDeps::new(vision, store, config.default_bucket.clone())
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/info", post(extract_info_handler))
        .route("/info/*key", get(get_info_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(deps))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    request_id = %Uuid::now_v7(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}
