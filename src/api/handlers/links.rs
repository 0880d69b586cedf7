//! Handlers for reading and deleting short URLs.

use axum::{
    Json,
    extract::State,
};

use crate::api::dto::{Operation, UrlQuery, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short URL or bare id.
///
/// # Endpoint
///
/// `GET /api?url=<short url or id>`
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is empty.
/// Returns 404 Not Found if no record matches.
pub async fn read_handler(
    State(state): State<AppState>,
    query: UrlQuery,
) -> Result<Json<UrlResponse>, AppError> {
    let short_url = query.parse()?;

    let url = state.shortener_service.retrieve_url(&short_url).await?;

    Ok(Json(UrlResponse::new(Operation::Read, url)))
}

/// Deletes the record behind a short URL or bare id.
///
/// # Endpoint
///
/// `DELETE /api?url=<short url or id>`
///
/// The response echoes the (normalized) input in `url`.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is empty.
/// Returns 404 Not Found if no record existed.
pub async fn delete_handler(
    State(state): State<AppState>,
    query: UrlQuery,
) -> Result<Json<UrlResponse>, AppError> {
    let short_url = query.parse()?;

    state.shortener_service.delete_url(&short_url).await?;

    Ok(Json(UrlResponse::new(Operation::Delete, short_url)))
}
