//! Repository trait for short URL storage.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage port over the single collection of short URL records.
///
/// All lookups report a missing record as `Ok(None)` (or `Ok(false)` for
/// deletes); `Err` is reserved for faults of the backing store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryShortUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Persists a new record with a redirect count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage faults.
    async fn store(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its exact original URL.
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Deletes a record by its identifier.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none matched.
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;

    /// Increments the redirect count by one and returns the updated record.
    ///
    /// Must be atomic with respect to concurrent callers on the same id:
    /// N concurrent calls leave the count exactly N higher.
    async fn increment_and_fetch(&self, id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Reports whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
