//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL and counts the redirect.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Responds with 301 Moved Permanently. The count is incremented before
/// the response is sent, through the storage layer's atomic increment.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is blank.
/// Returns 404 Not Found if the id doesn't exist.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let short_id = short_id.trim();
    if short_id.is_empty() {
        return Err(AppError::bad_request());
    }

    let url = state.shortener_service.increment_redirect(short_id).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url)]).into_response())
}
