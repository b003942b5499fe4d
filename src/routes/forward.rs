//! Proxy forward handler
//!
//! Single handler for every inbound request: gates on the path prefix,
//! answers CORS preflight, picks an API key from the Authorization header,
//! rewrites the outbound headers, and relays the upstream response.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::select_api_key,
    error::AppError,
    proxy::headers::{apply_cors_headers, build_outbound_headers},
    AppState,
};

/// Path prefix the proxy answers on; everything else is 404
pub const PROXY_PREFIX: &str = "/proxygemini";

/// Handle one inbound request end to end
///
/// Mounted as the router fallback so the prefix gate sees every path,
/// including ones no route pattern would match.
pub async fn forward_handler(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, AppError> {
    let start_time = Instant::now();
    let trace_id = short_trace_id();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if !path.starts_with(PROXY_PREFIX) {
        info!(trace_id = %trace_id, method = %method, path = %path, "Rejected non-proxy path");
        return Ok((StatusCode::NOT_FOUND, "Not Found").into_response());
    }

    if method == Method::OPTIONS {
        info!(trace_id = %trace_id, path = %path, "Answering CORS preflight");
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return Ok(response);
    }

    let api_key = select_api_key(request.headers()).ok_or_else(|| {
        warn!(
            trace_id = %trace_id,
            method = %method,
            path = %path,
            "Missing or invalid Authorization header"
        );
        AppError::MissingCredentials
    })?;

    let headers = build_outbound_headers(request.headers(), &api_key);
    let body = request.into_body();

    let response = state.upstream.forward(method.clone(), headers, body).await?;

    info!(
        trace_id = %trace_id,
        method = %method,
        path = %path,
        status = %response.status(),
        duration_ms = %format!("{:.2}", start_time.elapsed().as_secs_f64() * 1000.0),
        "Proxy request completed"
    );

    Ok(response)
}

/// Short random id tying one request's log lines together
fn short_trace_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}
