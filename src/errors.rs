use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

/// Errors reported to the dashboard in the response body.
///
/// The dashboard only checks for an `error` field, so every variant is sent with
/// `200 OK`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown endpoint")]
    UnknownEndpoint,

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
