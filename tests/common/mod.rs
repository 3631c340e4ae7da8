#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::domain::entities::ShortLink;
use tinylink::domain::repositories::LinkStore;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::MemoryLinkStore;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

/// Store whose every operation fails like an unreachable database.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn put(&self, _link: &ShortLink) -> Result<(), AppError> {
        Err(unreachable_db())
    }

    async fn get(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(unreachable_db())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(unreachable_db())
    }
}

fn unreachable_db() -> AppError {
    AppError::persistence(
        "Database error",
        json!({ "reason": "connection refused" }),
    )
}

pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    AppState::new(Arc::new(LinkService::new(store, BASE_URL)))
}

/// State over a fresh in-memory store; the store is returned for inspection.
pub fn memory_state() -> (AppState, MemoryLinkStore) {
    let store = MemoryLinkStore::new();
    (create_test_state(Arc::new(store.clone())), store)
}

pub fn failing_state() -> AppState {
    create_test_state(Arc::new(FailingStore))
}

/// Pulls the six-character code out of a rendered confirmation page.
pub fn extract_code(body: &str) -> String {
    let marker = format!("{}/short/", BASE_URL);
    let start = body.find(&marker).expect("short URL in body") + marker.len();
    body[start..start + 6].to_string()
}
