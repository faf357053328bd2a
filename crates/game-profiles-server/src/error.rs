//! HTTP error mapping
//!
//! Wraps `DomainError` so handlers can use `?` and still answer with the
//! right status code and a `{"error": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use game_profiles::DomainError;

/// API error type
#[derive(Debug)]
pub struct ApiError(pub DomainError);

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Unreachable(_) | DomainError::UpstreamNotFound(_) => {
                StatusCode::BAD_GATEWAY
            }
            DomainError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            DomainError::InvalidInput(msg)
            | DomainError::Conflict(msg)
            | DomainError::Unreachable(msg)
            | DomainError::UpstreamNotFound(msg) => msg.clone(),
            DomainError::NotFound { entity_type, .. } => format!("{entity_type} not found"),
            DomainError::Unexpected(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        let body = Json(json!({
            "error": self.message(),
        }));

        (status, body).into_response()
    }
}
