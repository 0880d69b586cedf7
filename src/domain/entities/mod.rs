//! Core domain entities.
//!
//! The service has a single entity, [`ShortUrl`], plus [`NewShortUrl`] as
//! its creation input.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
