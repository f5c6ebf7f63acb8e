// HTTP error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors surfaced to API callers
///
/// Each variant carries the human-readable detail returned in the body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or empty request content
    #[error("{0}")]
    ClientInput(String),

    /// Model reply on the analysis path was not valid JSON
    #[error("{0}")]
    UpstreamFormat(String),

    /// Any other failure talking to the model
    #[error("{0}")]
    UpstreamService(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ClientInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamFormat(_) | ApiError::UpstreamService(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ClientInput(_) => "client_input",
            ApiError::UpstreamFormat(_) => "upstream_format",
            ApiError::UpstreamService(_) => "upstream_service",
        }
    }
}

/// Unreadable or mistyped request bodies are client errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ClientInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "Request failed");
        } else {
            tracing::warn!(kind = self.kind(), error = %self, "Rejected request");
        }

        let body = serde_json::json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
