//! Error responses shared by every view.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Request-level failures surfaced to the client as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested record is not in the catalog. Terminal; the client
    /// should navigate elsewhere.
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(what) => write!(f, "{} not found", what),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        tracing::debug!("Responding {} - {}", status, self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
