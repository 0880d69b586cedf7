//! API route configuration.

use crate::api::handlers::{count_handler, delete_handler, read_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL management routes.
///
/// # Endpoints
///
/// - `POST   /api?url=`       - Shorten a URL
/// - `GET    /api?url=`       - Resolve a short URL
/// - `DELETE /api?url=`       - Delete a short URL
/// - `GET    /api/count?url=` - Redirect count of a short URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api",
            post(shorten_handler)
                .get(read_handler)
                .delete(delete_handler),
        )
        .route("/api/count", get(count_handler))
}
