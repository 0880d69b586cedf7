//! Helper functions shared across layers.
//!
//! - [`id_generator`] - Short identifier generation
//! - [`extract_id`] - Identifier extraction from short URLs
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod extract_host;
pub mod extract_id;
pub mod id_generator;
