use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::web::fallback::not_found;

/// Builds the application router.
///
/// There are no routes: every request — the root path included — falls
/// through to [`not_found`].
pub fn app_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
