//! Application error type and its HTTP representation.
//!
//! Every failure the service can report falls into one of three kinds:
//! bad input, a missing record, or an internal fault. Values are built
//! through the constructor functions on [`AppError`]; handlers return them
//! directly and [`IntoResponse`] renders the JSON error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

const BAD_REQUEST_MESSAGE: &str = "There was something wrong with your request";
const NOT_FOUND_MESSAGE: &str = "The resource was not found";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later";

/// JSON body returned for every error response.
///
/// ```json
/// { "status": "error", "message": "The resource was not found", "http_status": 404 }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    pub http_status: u16,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or empty input (400).
    #[error("{message}")]
    BadRequest { message: String },

    /// No record matches the requested identifier (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Identifier generation or storage failure (500).
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request() -> Self {
        Self::bad_request_with(BAD_REQUEST_MESSAGE)
    }

    pub fn bad_request_with(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::not_found_with(NOT_FOUND_MESSAGE)
    }

    pub fn not_found_with(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::internal_with(INTERNAL_MESSAGE)
    }

    pub fn internal_with(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the serializable body for this error.
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            status: "error",
            message: self.to_string(),
            http_status: self.status_code().as_u16(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal()
    }
}
