//! Host extraction from HTTP requests.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

/// Returns the host the request was addressed to, port included.
///
/// The `Host` header is used when present. HTTP/2 clients send the
/// `:authority` pseudo-header instead, which ends up in the request URI,
/// so the URI authority is the fallback.
///
/// The port is kept because the result is used to build short URLs that
/// must point back at this server (`localhost:8081`, `[::1]:8081`).
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if:
/// - Neither a `Host` header nor a URI authority is present
/// - The header value contains invalid UTF-8
pub fn extract_host(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    if let Some(value) = headers.get(header::HOST) {
        let host = value
            .to_str()
            .map_err(|_| AppError::bad_request_with("Invalid Host header"))?
            .trim();

        if !host.is_empty() {
            return Ok(host.to_string());
        }
    }

    match uri.authority() {
        Some(authority) => Ok(authority.as_str().to_string()),
        None => Err(AppError::bad_request_with("Missing Host header")),
    }
}
