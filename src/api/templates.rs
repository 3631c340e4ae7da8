//! Server-rendered HTML pages.
//!
//! Templates live in `templates/` and are compiled in by Askama. Values are
//! HTML-escaped on output.

use askama::Template;
use askama_web::WebTemplate;

/// Landing page with the submission form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Confirmation page shown after a successful `POST /shorten`.
///
/// Renders `templates/shorten.html` with the submitted URL, a link to the
/// short URL and the form again.
#[derive(Template, WebTemplate)]
#[template(path = "shorten.html")]
pub struct ShortenTemplate {
    pub original_url: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_page_contains_both_urls() {
        let page = ShortenTemplate {
            original_url: "http://example.com".to_string(),
            short_url: "http://localhost:8080/short/Ab3xYz".to_string(),
        }
        .render()
        .unwrap();

        assert!(page.contains("Original URL: http://example.com"));
        assert!(page.contains(r#"<a href="http://localhost:8080/short/Ab3xYz">"#));
        assert!(page.contains(r#"action="/shorten""#));
    }

    #[test]
    fn test_shorten_page_escapes_markup() {
        let page = ShortenTemplate {
            original_url: "http://example.com/<script>".to_string(),
            short_url: "http://localhost:8080/short/Ab3xYz".to_string(),
        }
        .render()
        .unwrap();

        assert!(!page.contains("<script>"));
        assert!(page.contains("script"));
    }

    #[test]
    fn test_index_page_has_form() {
        let page = IndexTemplate {}.render().unwrap();

        assert!(page.contains(r#"method="post""#));
        assert!(page.contains(r#"name="url""#));
    }
}
