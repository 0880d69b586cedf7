//! Data Transfer Objects for API requests and responses.

pub mod health;
pub mod short_url;

pub use short_url::{CountResponse, Operation, UrlQuery, UrlResponse};
