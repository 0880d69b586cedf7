//! Application layer services implementing business logic.
//!
//! Services consume the repository traits of the domain layer and provide
//! the operations HTTP handlers and the admin CLI call into.
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten, resolve, delete and count

pub mod services;
