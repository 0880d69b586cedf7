#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum_test::TestServer;
use short_to_me::application::services::ShortenerService;
use short_to_me::domain::repositories::ShortUrlRepository;
use short_to_me::error::AppError;
use short_to_me::infrastructure::persistence::MemoryShortUrlRepository;
use short_to_me::routes::app_service;
use short_to_me::state::AppState;
use short_to_me::utils::id_generator::{GenerateShortId, TimestampIdGenerator};

pub const BASE_URL: &str = "http://short.to";

/// Generator that hands out a fixed list of ids, then fails.
pub struct FixedIdGenerator {
    ids: Vec<String>,
    next: AtomicUsize,
}

impl FixedIdGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|s| s.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl GenerateShortId for FixedIdGenerator {
    fn generate(&self, _seed: i64) -> Result<String, AppError> {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.ids
            .get(i)
            .cloned()
            .ok_or_else(|| AppError::internal_with("no more ids"))
    }
}

pub fn memory_repository() -> Arc<MemoryShortUrlRepository> {
    Arc::new(MemoryShortUrlRepository::new())
}

pub fn create_service(repository: Arc<dyn ShortUrlRepository>) -> Arc<ShortenerService> {
    Arc::new(ShortenerService::new(
        repository,
        Arc::new(TimestampIdGenerator::new()),
    ))
}

pub fn create_test_state(base_url: Option<&str>) -> AppState {
    AppState::new(
        create_service(memory_repository()),
        base_url.map(str::to_string),
    )
}

pub fn create_test_server(base_url: Option<&str>) -> TestServer {
    let app = app_service(create_test_state(base_url), "public_docs");
    TestServer::new(app).unwrap()
}

/// Returns the trailing path segment of a short URL.
pub fn id_of(short_url: &str) -> String {
    short_url.rsplit('/').next().unwrap().to_string()
}
