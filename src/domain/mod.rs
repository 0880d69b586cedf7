//! Domain layer: entities and the storage port.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or on any concrete database.

pub mod entities;
pub mod repositories;
