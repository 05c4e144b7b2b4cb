use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use chirpy_filter::ValidationError;

use crate::response::respond_with_error;

/// Every way a request can fail. The display string is what the client sees
/// in the `{"error": ...}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Conflict(String),

    /// Persistence or password hashing failed.
    #[error("failed: {0}")]
    Upstream(String),

    #[error("failed to encode response")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream(_) | Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn upstream(err: impl std::fmt::Display) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(msg) => error!("Upstream failure: {}", msg),
            Self::Encoding(e) => error!("Response encoding failed: {}", e),
            other => warn!("Request rejected ({}): {}", other.status(), other),
        }
        respond_with_error(self.status(), &self.to_string())
    }
}
