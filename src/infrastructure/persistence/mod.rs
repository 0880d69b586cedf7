//! Storage adapters implementing [`crate::domain::repositories::ShortUrlRepository`].
//!
//! - [`PgShortUrlRepository`] - PostgreSQL via SQLx
//! - [`MemoryShortUrlRepository`] - In-process map for tests and database-less runs

pub mod memory_short_url_repository;
pub mod pg_short_url_repository;

pub use memory_short_url_repository::MemoryShortUrlRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
