//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
