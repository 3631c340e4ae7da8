//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Durable link store over the `short_urls` table.
///
/// Queries use bound parameters. `short_code` carries a unique constraint, so a
/// duplicate insert surfaces as [`AppError::Conflict`].
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn put(&self, link: &ShortLink) -> Result<(), AppError> {
        sqlx::query("INSERT INTO short_urls (original_url, short_code) VALUES ($1, $2)")
            .bind(&link.target_url)
            .bind(&link.code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<String>, AppError> {
        let url = sqlx::query_scalar::<_, String>(
            "SELECT original_url FROM short_urls WHERE short_code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;

        Ok(())
    }
}
