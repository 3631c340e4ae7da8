//! Short link entity.

/// A stored mapping from a short code to the URL it redirects to.
///
/// Links are immutable once created: there is no update, delete or expiry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub target_url: String,
}

impl ShortLink {
    /// Creates a new link.
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let link = ShortLink::new("abc123", "https://example.com");

        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
    }

    #[test]
    fn test_short_link_equality() {
        let a = ShortLink::new("abc123", "https://example.com");
        let b = ShortLink::new("abc123".to_string(), "https://example.com".to_string());

        assert_eq!(a, b);
        assert_ne!(a, ShortLink::new("abc124", "https://example.com"));
    }
}
