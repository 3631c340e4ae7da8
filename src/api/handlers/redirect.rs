//! Handlers for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /short/{code}`
///
/// # Errors
///
/// - 404 Not Found if the code is unknown
/// - 500 Internal Server Error if the link store fails, or the stored URL
///   cannot be sent as a `Location` header
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    debug!(%code, %target, "redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Answers `GET /short` (and `/short/` after normalization) where no code was given.
pub async fn missing_code_handler() -> AppError {
    AppError::not_found("Short key is missing", json!({}))
}
