//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Submission form
//! - `POST /shorten`       - Create a short link from form field `url`
//! - `GET  /short/{code}`  - Permanent redirect to the stored URL
//! - `GET  /health`        - Store health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, index_handler, missing_code_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and per-request tracing, without path normalization.
///
/// Requests for a method a route does not serve get `405 Method Not Allowed`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/short", get(missing_code_handler))
        .route("/short/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/short/` reaches the
/// missing-code handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
