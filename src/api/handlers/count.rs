//! Handler for the redirect count endpoint.

use axum::{
    Json,
    extract::State,
};

use crate::api::dto::{CountResponse, UrlQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Returns how many times a short URL has been followed.
///
/// # Endpoint
///
/// `GET /api/count?url=<short url or id>`
///
/// # Response
///
/// ```json
/// { "status": "success", "operation": "count", "count": 2 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is empty.
/// Returns 404 Not Found if no record matches.
pub async fn count_handler(
    State(state): State<AppState>,
    query: UrlQuery,
) -> Result<Json<CountResponse>, AppError> {
    let short_url = query.parse()?;

    let count = state.shortener_service.count_redirects(&short_url).await?;

    Ok(Json(CountResponse::new(count)))
}
