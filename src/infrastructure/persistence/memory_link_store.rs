//! In-process link store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Volatile link store backed by a concurrent map.
///
/// Contents are lost on restart. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct MemoryLinkStore {
    links: Arc<DashMap<String, String>>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn put(&self, link: &ShortLink) -> Result<(), AppError> {
        self.links.insert(link.code.clone(), link.target_url.clone());
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.links.get(code).map(|url| url.value().clone()))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
