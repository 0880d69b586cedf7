//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

/// PostgreSQL repository over the `short_urls` table.
///
/// Queries are bound at runtime; the schema lives in `migrations/`.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn store(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO short_urls (id, url, redirect_count)
            VALUES ($1, $2, 0)
            RETURNING id, url, redirect_count
            "#,
        )
        .bind(&new_short_url.id)
        .bind(&new_short_url.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, url, redirect_count
            FROM short_urls
            WHERE url = $1
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            "SELECT id, url, redirect_count FROM short_urls WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_and_fetch(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        // Single statement: the row lock taken by UPDATE serializes concurrent increments.
        let row = sqlx::query_as::<_, ShortUrl>(
            r#"
            UPDATE short_urls
            SET redirect_count = redirect_count + 1
            WHERE id = $1
            RETURNING id, url, redirect_count
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
