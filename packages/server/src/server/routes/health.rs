use axum::{extract::Extension, http::StatusCode, Json};

use crate::domains::cards::{check_health, HealthStatus};
use crate::kernel::ServerDeps;

/// Health check endpoint
///
/// Returns 200 OK when the default bucket is reachable, 500 otherwise.
pub async fn health_handler(
    Extension(deps): Extension<ServerDeps>,
) -> (StatusCode, Json<HealthStatus>) {
    let health = check_health(&deps).await;

    let status_code = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status_code, Json(health))
}
