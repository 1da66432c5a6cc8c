//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;
use vg_core::VgError;

/// API error with status code, machine-readable code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(code: &'static str, msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code, message: msg.into() }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, code: "internal_error", message: msg.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<VgError> for ApiError {
    fn from(err: VgError) -> Self {
        debug!(kind = err.kind(), error = %err, "request rejected");
        if err.is_input_error() {
            ApiError::bad_request(err.kind(), err.to_string())
        } else {
            ApiError::internal(err.to_string())
        }
    }
}
