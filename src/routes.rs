//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_id}` - Short URL redirect
//! - `GET  /health`     - Storage health check
//! - `/api*`            - Short URL management (see [`crate::api::routes`])
//! - `/docs/*`          - Static documentation
//!
//! Anything else answers with the JSON 404 body.

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::extract::Request;
use axum::routing::{IntoMakeService, get};
use axum::{Router, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are not handled here; use [`app_service`] to serve.
pub fn app_router(state: AppState, docs_dir: &str) -> Router {
    Router::new()
        .route("/{short_id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .nest_service("/docs", ServeDir::new(docs_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// The service the server runs: [`app_router`] behind trailing-slash
/// normalization, so `/api/` routes like `/api`.
///
/// The layer must wrap the router from the outside because routing
/// happens before any router-level middleware sees the request.
pub fn app_service(state: AppState, docs_dir: &str) -> IntoMakeService<NormalizePath<Router>> {
    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state, docs_dir));
    ServiceExt::<Request>::into_make_service(app)
}
