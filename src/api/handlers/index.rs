//! Landing page handler.

use crate::api::templates::IndexTemplate;

/// Renders the submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> IndexTemplate {
    IndexTemplate {}
}
