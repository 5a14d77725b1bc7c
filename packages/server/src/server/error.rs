//! HTTP mapping for card errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::cards::CardError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl CardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            format!("Internal server error: {}", self)
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
            self.to_string()
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
