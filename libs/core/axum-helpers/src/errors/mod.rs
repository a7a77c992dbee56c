pub mod handlers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// HTTP-facing error.
///
/// Each variant fixes the status code. The message is logged but never sent:
/// every error response has an empty body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::BadRequest(msg) => tracing::info!(%status, "Bad request: {}", msg),
            AppError::NotFound(msg) => tracing::info!(%status, "Not found: {}", msg),
            AppError::InternalServerError(msg) => {
                tracing::error!(%status, "Internal server error: {}", msg)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(%status, "Service unavailable: {}", msg)
            }
        }

        status.into_response()
    }
}
