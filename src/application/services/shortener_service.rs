//! URL shortening and resolution service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::extract_id::extract_id;
use crate::utils::id_generator::GenerateShortId;

/// Service for creating, resolving and deleting short URLs.
///
/// Stateless apart from its collaborators: every record lives behind the
/// [`ShortUrlRepository`], so one instance is shared by all requests.
pub struct ShortenerService {
    repository: Arc<dyn ShortUrlRepository>,
    id_generator: Arc<dyn GenerateShortId>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        id_generator: Arc<dyn GenerateShortId>,
    ) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Returns the identifier for `url`, creating a record if needed.
    ///
    /// # Deduplication
    ///
    /// If a record with exactly the same URL string exists, its id is
    /// returned and nothing is written. No normalization is applied, so
    /// `http://a.com` and `http://a.com/` get different ids. Two concurrent
    /// calls for the same new URL may both create a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `url` is empty or whitespace.
    /// Returns [`AppError::Internal`] if id generation or storage fails.
    #[instrument(skip(self))]
    pub async fn shorten_url(&self, url: &str) -> Result<String, AppError> {
        if url.trim().is_empty() {
            warn!("Requested url is empty");
            return Err(AppError::bad_request());
        }

        info!("Requested short url");

        match self.repository.find_by_url(url).await {
            Ok(Some(existing)) => {
                info!(id = %existing.id, "Already existing");
                return Ok(existing.id);
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Lookup by url failed, creating a new record"),
        }

        let id = self.id_generator.generate(Utc::now().timestamp())?;

        let stored = self
            .repository
            .store(NewShortUrl {
                id,
                url: url.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Unable to store short url");
                AppError::internal()
            })?;

        info!(id = %stored.id, "Created id");
        Ok(stored.id)
    }

    /// Resolves a short URL (or bare id) to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    #[instrument(skip(self))]
    pub async fn retrieve_url(&self, short_url: &str) -> Result<String, AppError> {
        info!("Requested read url");

        let existing = self.find_existing(extract_id(short_url)).await?;

        info!(url = %existing.url, "Found");
        Ok(existing.url)
    }

    /// Deletes the record behind a short URL (or bare id).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record existed under the id.
    #[instrument(skip(self))]
    pub async fn delete_url(&self, short_url: &str) -> Result<(), AppError> {
        info!("Requested delete url");

        match self.repository.delete_by_id(extract_id(short_url)).await {
            Ok(true) => {
                info!("Url deleted");
                Ok(())
            }
            Ok(false) => {
                info!("Url was not found");
                Err(AppError::not_found())
            }
            Err(e) => {
                error!(error = %e, "Delete failed, reporting as not found");
                Err(AppError::not_found())
            }
        }
    }

    /// Returns how many times a short URL (or bare id) has been redirected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    #[instrument(skip(self))]
    pub async fn count_redirects(&self, short_url: &str) -> Result<i64, AppError> {
        info!("Requested count redirects");

        let existing = self.find_existing(extract_id(short_url)).await?;

        info!(count = existing.redirect_count, "Returning count");
        Ok(existing.redirect_count)
    }

    /// Counts one redirect for `id` and returns the URL to redirect to.
    ///
    /// `id` is used verbatim. The increment is delegated to the storage
    /// layer's atomic increment-and-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    #[instrument(skip(self))]
    pub async fn increment_redirect(&self, id: &str) -> Result<String, AppError> {
        info!("Increment redirect count");

        let updated = found_or_not_found(self.repository.increment_and_fetch(id).await)?;

        info!(count = updated.redirect_count, "Count incremented");
        Ok(updated.url)
    }

    /// Reports whether the storage backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }

    async fn find_existing(&self, id: &str) -> Result<ShortUrl, AppError> {
        found_or_not_found(self.repository.find_by_id(id).await)
    }
}

/// Maps a lookup result onto the service's error kinds.
///
/// Storage faults are logged and reported as not found: the storage port
/// does not tell a lost connection apart from a missing record.
fn found_or_not_found(result: Result<Option<ShortUrl>, AppError>) -> Result<ShortUrl, AppError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => {
            info!("Url was not found");
            Err(AppError::not_found())
        }
        Err(e) => {
            error!(error = %e, "Lookup failed, reporting as not found");
            Err(AppError::not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortUrlRepository;
    use crate::utils::id_generator::MockGenerateShortId;

    const TEST_URL: &str = "http://www.test.com";
    const SHORT_URL: &str = "http://www.short.me/RMAp1Vz";
    const SHORT_ID: &str = "RMAp1Vz";

    fn create_test_record(count: i64) -> ShortUrl {
        ShortUrl::new(SHORT_ID.to_string(), TEST_URL.to_string(), count)
    }

    fn service(repo: MockShortUrlRepository, generator: MockGenerateShortId) -> ShortenerService {
        ShortenerService::new(Arc::new(repo), Arc::new(generator))
    }

    #[tokio::test]
    async fn test_shorten_url_creates_new_record() {
        let mut mock_repo = MockShortUrlRepository::new();
        let mut mock_generator = MockGenerateShortId::new();

        mock_repo
            .expect_find_by_url()
            .withf(|url| url == TEST_URL)
            .times(1)
            .returning(|_| Ok(None));

        mock_generator
            .expect_generate()
            .withf(|seed| *seed > 0)
            .times(1)
            .returning(|_| Ok(SHORT_ID.to_string()));

        mock_repo
            .expect_store()
            .withf(|new| new.id == SHORT_ID && new.url == TEST_URL)
            .times(1)
            .returning(|new| Ok(new.into()));

        let result = service(mock_repo, mock_generator)
            .shorten_url(TEST_URL)
            .await;

        assert_eq!(result.unwrap(), SHORT_ID);
    }

    #[tokio::test]
    async fn test_shorten_url_returns_existing_id() {
        let mut mock_repo = MockShortUrlRepository::new();
        let mut mock_generator = MockGenerateShortId::new();

        mock_repo
            .expect_find_by_url()
            .times(1)
            .returning(|_| Ok(Some(create_test_record(3))));

        mock_generator.expect_generate().times(0);
        mock_repo.expect_store().times(0);

        let result = service(mock_repo, mock_generator)
            .shorten_url(TEST_URL)
            .await;

        assert_eq!(result.unwrap(), SHORT_ID);
    }

    #[tokio::test]
    async fn test_shorten_url_rejects_blank_input_before_storage() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_find_by_url().times(0);
        mock_repo.expect_store().times(0);

        let service = service(mock_repo, MockGenerateShortId::new());

        for input in ["", "   ", "\t\n"] {
            let result = service.shorten_url(input).await;
            assert!(matches!(result, Err(AppError::BadRequest { .. })));
        }
    }

    #[tokio::test]
    async fn test_shorten_url_lookup_error_falls_through_to_create() {
        let mut mock_repo = MockShortUrlRepository::new();
        let mut mock_generator = MockGenerateShortId::new();

        mock_repo
            .expect_find_by_url()
            .times(1)
            .returning(|_| Err(AppError::internal()));

        mock_generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok(SHORT_ID.to_string()));

        mock_repo
            .expect_store()
            .times(1)
            .returning(|new| Ok(new.into()));

        let result = service(mock_repo, mock_generator)
            .shorten_url(TEST_URL)
            .await;

        assert_eq!(result.unwrap(), SHORT_ID);
    }

    #[tokio::test]
    async fn test_shorten_url_generator_failure_is_internal() {
        let mut mock_repo = MockShortUrlRepository::new();
        let mut mock_generator = MockGenerateShortId::new();

        mock_repo.expect_find_by_url().returning(|_| Ok(None));
        mock_generator
            .expect_generate()
            .returning(|_| Err(AppError::internal()));
        mock_repo.expect_store().times(0);

        let result = service(mock_repo, mock_generator)
            .shorten_url(TEST_URL)
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_shorten_url_store_failure_is_internal() {
        let mut mock_repo = MockShortUrlRepository::new();
        let mut mock_generator = MockGenerateShortId::new();

        mock_repo.expect_find_by_url().returning(|_| Ok(None));
        mock_generator
            .expect_generate()
            .returning(|_| Ok(SHORT_ID.to_string()));
        mock_repo
            .expect_store()
            .returning(|_| Err(AppError::internal_with("connection reset")));

        let result = service(mock_repo, mock_generator)
            .shorten_url(TEST_URL)
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_retrieve_url_accepts_bare_id_and_full_url() {
        let mut mock_repo = MockShortUrlRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| id == SHORT_ID)
            .times(2)
            .returning(|_| Ok(Some(create_test_record(0))));

        let service = service(mock_repo, MockGenerateShortId::new());

        assert_eq!(service.retrieve_url(SHORT_ID).await.unwrap(), TEST_URL);
        assert_eq!(service.retrieve_url(SHORT_URL).await.unwrap(), TEST_URL);
    }

    #[tokio::test]
    async fn test_retrieve_url_not_found() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(mock_repo, MockGenerateShortId::new())
            .retrieve_url("unknown")
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_retrieve_url_storage_error_reported_as_not_found() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(AppError::internal()));

        let result = service(mock_repo, MockGenerateShortId::new())
            .retrieve_url(SHORT_ID)
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_url_success() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_delete_by_id()
            .withf(|id| id == SHORT_ID)
            .times(1)
            .returning(|_| Ok(true));

        let result = service(mock_repo, MockGenerateShortId::new())
            .delete_url(SHORT_URL)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_url_no_match_is_not_found() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_delete_by_id().returning(|_| Ok(false));

        let result = service(mock_repo, MockGenerateShortId::new())
            .delete_url(SHORT_ID)
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_count_redirects() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| id == SHORT_ID)
            .returning(|_| Ok(Some(create_test_record(10))));

        let result = service(mock_repo, MockGenerateShortId::new())
            .count_redirects(SHORT_URL)
            .await;

        assert_eq!(result.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_count_redirects_not_found() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(mock_repo, MockGenerateShortId::new())
            .count_redirects(SHORT_ID)
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_increment_redirect_returns_url() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_increment_and_fetch()
            .withf(|id| id == SHORT_ID)
            .times(1)
            .returning(|_| Ok(Some(create_test_record(11))));

        let result = service(mock_repo, MockGenerateShortId::new())
            .increment_redirect(SHORT_ID)
            .await;

        assert_eq!(result.unwrap(), TEST_URL);
    }

    #[tokio::test]
    async fn test_increment_redirect_uses_id_verbatim() {
        let mut mock_repo = MockShortUrlRepository::new();
        mock_repo
            .expect_increment_and_fetch()
            .withf(|id| id == SHORT_URL)
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo, MockGenerateShortId::new())
            .increment_redirect(SHORT_URL)
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
