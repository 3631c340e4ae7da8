//! Handler for link shortening endpoint.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::ShortenForm;
use crate::api::templates::ShortenTemplate;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a submitted URL and renders a confirmation page.
///
/// # Endpoint
///
/// `POST /shorten` with `application/x-www-form-urlencoded` body `url=<target>`.
/// Other methods get `405 Method Not Allowed` from the router.
///
/// # Response
///
/// `200 OK` with an HTML page showing the original URL and a link to
/// `{BASE_URL}/short/{code}`.
///
/// # Errors
///
/// - 400 Bad Request if the form cannot be parsed or `url` is empty
/// - 500 Internal Server Error if the link store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<ShortenTemplate, AppError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::bad_request(
            "Failed to parse form data",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    form.validate()?;

    let link = state.link_service.shorten(&form.url).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(ShortenTemplate {
        original_url: link.target_url,
        short_url,
    })
}
