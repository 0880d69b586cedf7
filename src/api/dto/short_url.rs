//! DTOs for the `/api` endpoints.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// `?url=` query parameter shared by every `/api` endpoint.
///
/// Extracted from the raw query pairs: the first `url` wins, other
/// parameters are ignored and a missing `url` reads as empty.
#[derive(Debug, Default)]
pub struct UrlQuery {
    pub url: String,
}

impl<S> FromRequestParts<S> for UrlQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|e| {
            tracing::warn!(error = %e, "Malformed query string");
            AppError::bad_request()
        })?;

        let url = pairs
            .into_iter()
            .find(|(key, _)| key == "url")
            .map(|(_, value)| value)
            .unwrap_or_default();

        Ok(Self { url })
    }
}

impl UrlQuery {
    /// Returns the trimmed URL, prefixed with `http://` when it does not
    /// mention `http` anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the value is empty after trimming.
    pub fn parse(&self) -> Result<String, AppError> {
        let url = self.url.trim();

        if url.is_empty() {
            tracing::warn!("Requested url is empty");
            return Err(AppError::bad_request());
        }

        if url.contains("http") {
            Ok(url.to_string())
        } else {
            Ok(format!("http://{url}"))
        }
    }
}

/// Which operation a response describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Delete,
    Count,
}

/// Response carrying a URL.
///
/// ```json
/// { "status": "success", "operation": "create", "url": "http://short.to/2b9Xq1kA" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct UrlResponse {
    pub status: String,
    pub operation: Operation,
    pub url: String,
}

impl UrlResponse {
    pub fn new(operation: Operation, url: String) -> Self {
        Self {
            status: "success".to_string(),
            operation,
            url,
        }
    }
}

/// Response carrying a redirect count.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub status: String,
    pub operation: Operation,
    pub count: i64,
}

impl CountResponse {
    pub fn new(count: i64) -> Self {
        Self {
            status: "success".to_string(),
            operation: Operation::Count,
            count,
        }
    }
}
