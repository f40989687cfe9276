use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;

/// Build the axum router over a projects root.
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/", get(handler::index_handler))
        .route("/versions/:project", get(handler::versions_handler))
        .route("/explore/:project/:old/:new", get(handler::explore_handler))
        .route(
            "/compare/:project/:old/:new/*file",
            get(handler::compare_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}
