use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    Json,
};
use serde::Deserialize;

use crate::domains::cards::{
    fetch_result, process_request, CardError, ExtractionRequest, ExtractionResponse, StoredResult,
};
use crate::kernel::ServerDeps;

/// `POST /info` - extract a card from one or two stored images
pub async fn extract_info_handler(
    Extension(deps): Extension<ServerDeps>,
    body: Result<Json<ExtractionRequest>, JsonRejection>,
) -> Result<Json<ExtractionResponse>, CardError> {
    let Json(request) = body.map_err(|e| CardError::Validation(e.body_text()))?;

    process_request(request, &deps).await.map(Json)
}

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub bucket: Option<String>,
}

/// `GET /info/{*key}` - fetch a stored extraction result
pub async fn get_info_handler(
    Extension(deps): Extension<ServerDeps>,
    Path(key): Path<String>,
    Query(query): Query<ResultQuery>,
) -> Result<Json<StoredResult>, CardError> {
    fetch_result(&key, query.bucket.as_deref(), &deps)
        .await
        .map(Json)
}
