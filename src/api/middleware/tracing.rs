//! Per-request tracing for the shortener routes.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Trace layer applied to every route of [`crate::routes::router`].
///
/// One `INFO` span per request (method, path, HTTP version) and one `INFO`
/// event when the response is sent, with the status and the latency in ms.
/// A redirect and a rejected submission look like:
///
/// ```text
/// INFO request{method=GET uri=/short/Ab3xYz version=HTTP/1.1}: finished processing request latency=1 ms status=301
/// INFO request{method=POST uri=/shorten version=HTTP/1.1}: finished processing request latency=0 ms status=400
/// ```
///
/// Server errors (5xx) are additionally reported as failures by the
/// classifier; the error body itself is logged by `AppError`.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
