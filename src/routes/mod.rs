//! HTTP routes for proxygemini
//!
//! The whole surface is one catch-all handler: the path prefix gate lives in
//! the handler itself, so unmatched paths get the proxy's own 404 rather than
//! a router default.

pub mod forward;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(forward::forward_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
