//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::{debug, info, warn};

/// Maximum number of codes tried before giving up on a shorten request.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Wraps a [`LinkStore`] with input validation, collision handling and
/// short-URL formatting.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin used in rendered short URLs, e.g.
    /// `http://localhost:8080`.
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Creates a short link for `url`.
    ///
    /// Shortening the same URL twice yields two independent codes.
    ///
    /// # Code Generation
    ///
    /// Generates a random code and checks the store for it. On a collision,
    /// either seen by the existence check or reported by the store as
    /// [`AppError::Conflict`], a new code is tried, up to 10 times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is empty or contains ASCII control
    /// characters (it could never be sent back as a `Location` header); the store
    /// is not touched.
    /// Returns [`AppError::Persistence`] if the store fails.
    /// Returns [`AppError::Internal`] if every attempt collided.
    pub async fn shorten(&self, url: &str) -> Result<ShortLink, AppError> {
        if url.is_empty() {
            return Err(AppError::bad_request(
                "URL is required",
                json!({ "field": "url" }),
            ));
        }

        if url.chars().any(|c| c.is_ascii_control()) {
            return Err(AppError::bad_request(
                "URL contains control characters",
                json!({ "field": "url" }),
            ));
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let code = generate_code();

            if self.store.get(&code).await?.is_some() {
                debug!(%code, attempt, "short code collision");
                continue;
            }

            let link = ShortLink::new(code, url);
            match self.store.put(&link).await {
                Ok(()) => {
                    info!(code = %link.code, target = %link.target_url, "short link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    debug!(code = %link.code, attempt, "short code rejected by store");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(attempts = MAX_ATTEMPTS, "could not allocate a unique short code");
        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is empty or unknown.
    /// Returns [`AppError::Persistence`] on storage faults.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if code.is_empty() {
            return Err(AppError::not_found("Short key is missing", json!({})));
        }

        self.store.get(code).await?.ok_or_else(|| {
            AppError::not_found("Shortened URL not found", json!({ "code": code }))
        })
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/short/{}", self.base_url, code)
    }

    /// Checks that the underlying store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use crate::utils::code_generator::{CHARSET, CODE_LENGTH};
    use mockall::Sequence;

    fn service(store: MockLinkStore) -> LinkService {
        LinkService::new(Arc::new(store), "http://localhost:8080")
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut store = MockLinkStore::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        store
            .expect_put()
            .withf(|link| link.target_url == "https://example.com")
            .times(1)
            .returning(|_| Ok(()));

        let link = service(store).shorten("https://example.com").await.unwrap();

        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.code.len(), CODE_LENGTH);
        assert!(link.code.bytes().all(|b| CHARSET.contains(&b)));
    }

    #[tokio::test]
    async fn test_shorten_checks_the_code_it_stores() {
        let mut store = MockLinkStore::new();
        let checked = Arc::new(std::sync::Mutex::new(String::new()));

        let seen = checked.clone();
        store.expect_get().times(1).returning(move |code| {
            *seen.lock().unwrap() = code.to_string();
            Ok(None)
        });

        let seen = checked.clone();
        store
            .expect_put()
            .withf(move |link| *seen.lock().unwrap() == link.code)
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(store).shorten("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_empty_url_does_not_touch_store() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(0);
        store.expect_put().times(0);

        let result = service(store).shorten("").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_rejects_control_characters() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(0);
        store.expect_put().times(0);
        let service = service(store);

        for url in ["http://example.com/a\nb", "http://example.com/\r", "http://a.com/\t"] {
            let result = service.shorten(url).await;
            assert!(matches!(result, Err(AppError::Validation { .. })), "{url:?}");
        }
    }

    #[tokio::test]
    async fn test_shorten_accepts_non_ascii_url() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(1).returning(|_| Ok(None));
        store.expect_put().times(1).returning(|_| Ok(()));

        let link = service(store).shorten("http://example.com/café").await.unwrap();

        assert_eq!(link.target_url, "http://example.com/café");
    }

    #[tokio::test]
    async fn test_shorten_retries_on_existing_code() {
        let mut store = MockLinkStore::new();
        let mut seq = Sequence::new();

        store
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some("https://taken.com".to_string())));
        store
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        store
            .expect_put()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        assert!(service(store).shorten("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_retries_on_store_conflict() {
        let mut store = MockLinkStore::new();
        let mut seq = Sequence::new();

        store.expect_get().times(2).returning(|_| Ok(None));
        store
            .expect_put()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({}),
                ))
            });
        store
            .expect_put()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        assert!(service(store).shorten("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut store = MockLinkStore::new();

        store
            .expect_get()
            .times(MAX_ATTEMPTS)
            .returning(|_| Ok(Some("https://taken.com".to_string())));
        store.expect_put().times(0);

        let result = service(store).shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_shorten_propagates_persistence_error() {
        let mut store = MockLinkStore::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        store
            .expect_put()
            .times(1)
            .returning(|_| Err(AppError::persistence("Database error", json!({}))));

        let result = service(store).shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let url = service(store).resolve("abc123").await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(1).returning(|_| Ok(None));
        store.expect_put().times(0);

        let result = service(store).resolve("unknown-code").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_empty_code() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(0);

        let result = service(store).resolve("").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_storage_fault_is_not_not_found() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(AppError::persistence("Database error", json!({}))));

        let result = service(store).resolve("abc123").await;

        assert!(matches!(result, Err(AppError::Persistence { .. })));
    }

    #[test]
    fn test_short_url() {
        let service = service(MockLinkStore::new());
        assert_eq!(
            service.short_url("Ab3xYz"),
            "http://localhost:8080/short/Ab3xYz"
        );
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service =
            LinkService::new(Arc::new(MockLinkStore::new()), "https://s.example.com/");
        assert_eq!(
            service.short_url("abc123"),
            "https://s.example.com/short/abc123"
        );
    }
}
