//! Form input for the shorten endpoint.

use serde::Deserialize;
use validator::Validate;

/// `application/x-www-form-urlencoded` body of `POST /shorten`.
///
/// A missing `url` field deserializes to an empty string so that it is
/// reported by validation rather than as a parse failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}
