//! Storage trait for short links.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Contract shared by every link store backend.
///
/// Stores are shared between request handlers as `Arc<dyn LinkStore>`, so every
/// implementation must be safe to call concurrently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - process-local, volatile
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL `short_urls` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new link.
    ///
    /// The store does not check for an existing code. The memory store
    /// overwrites, the PostgreSQL store rejects the row through its unique
    /// constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the backend rejects a duplicate code.
    /// Returns [`AppError::Persistence`] if the backend is unreachable or the
    /// write fails.
    async fn put(&self, link: &ShortLink) -> Result<(), AppError>;

    /// Looks up the target URL for an exact code match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if no record matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on a storage fault, which is distinct
    /// from absence.
    async fn get(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Verifies that the backend is reachable.
    async fn health_check(&self) -> Result<(), AppError>;
}
