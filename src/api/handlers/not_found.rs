//! Fallback for unmatched routes.

use crate::error::AppError;

/// Renders the standard 404 error body for any unknown route.
pub async fn not_found_handler() -> AppError {
    AppError::not_found()
}
