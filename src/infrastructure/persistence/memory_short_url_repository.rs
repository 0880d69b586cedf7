//! In-process implementation of the short URL repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// A repository that keeps every record in a map guarded by one lock.
///
/// Records do not survive a restart. Used by tests and when the service
/// runs with `STORAGE_BACKEND=memory`.
#[derive(Default)]
pub struct MemoryShortUrlRepository {
    records: RwLock<HashMap<String, ShortUrl>>,
}

impl MemoryShortUrlRepository {
    pub fn new() -> Self {
        debug!("Using in-memory storage");
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    async fn store(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut records = self.records.write().await;

        if records.contains_key(&new_short_url.id) {
            return Err(AppError::internal_with(format!(
                "Duplicate id '{}'",
                new_short_url.id
            )));
        }

        let record = ShortUrl::from(new_short_url);
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.url == url).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.records.write().await.remove(id).is_some())
    }

    async fn increment_and_fetch(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        let mut records = self.records.write().await;

        Ok(records.get_mut(id).map(|record| {
            record.redirect_count += 1;
            record.clone()
        }))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
