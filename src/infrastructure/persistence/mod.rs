//! Link store implementations.
//!
//! - [`MemoryLinkStore`] - concurrent in-process map, lost on restart
//! - [`PgLinkStore`] - PostgreSQL `short_urls` table

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
