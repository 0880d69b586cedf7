//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Uri},
};

use crate::api::dto::{Operation, UrlQuery, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;

/// Shortens a URL, reusing the existing id when the URL is already stored.
///
/// # Endpoint
///
/// `POST /api?url=<url>`
///
/// # Response
///
/// ```json
/// { "status": "success", "operation": "create", "url": "http://localhost:8081/2b9Xq1kA" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is empty, or if no `BASE_URL` is
/// configured and the request names no host.
/// Returns 500 Internal Server Error if the id cannot be generated or stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    query: UrlQuery,
) -> Result<Json<UrlResponse>, AppError> {
    let url = query.parse()?;
    let prefix = short_url_prefix(&state, &headers, &uri)?;

    let id = state.shortener_service.shorten_url(&url).await?;

    Ok(Json(UrlResponse::new(
        Operation::Create,
        format!("{prefix}/{id}"),
    )))
}

/// Resolves the scheme and authority short URLs are built on.
fn short_url_prefix(state: &AppState, headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    match &state.base_url {
        Some(base_url) => Ok(base_url.clone()),
        None => Ok(format!("http://{}", extract_host(headers, uri)?)),
    }
}
