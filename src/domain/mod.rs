//! Domain layer: entities and the storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - The [`repositories::LinkStore`] trait implemented by the
//!   infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
