use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use tracing::{error, info};

use crate::context::AppContext;
use crate::event::not_found::NotFoundEvent;

/// Body returned to every caller.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Catch-all 404 handler.
///
/// # Overview
///
/// Registered as the final fallback in the router, so it answers the
/// root path and every unmatched path, for any method.
///
/// Every caller receives `404` / `404 Not Found`. When the request
/// carries a non-empty `Referer` header, a [`NotFoundEvent`] is captured
/// at the current clock time and handed to the emitter; the append runs
/// in the background and the response never waits on it.
///
/// # Error conditions
///
/// - Encode failure: logged, emission abandoned, response unaffected.
/// - Append failure: logged inside the emission task, response
///   unaffected.
///
/// Internal errors are never visible in the response body or status.
pub async fn not_found(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    // A missing or non-UTF-8 Referer is treated as empty.
    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    info!(referrer = %referrer, "404 Not Found");

    if let Some(event) = NotFoundEvent::capture(referrer, ctx.clock.as_ref()) {
        // The Ok handle is dropped: the append is never awaited here.
        if let Err(err) = ctx.emitter.emit(event) {
            error!(error = %err, "cannot encode not-found event");
        }
    }

    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
