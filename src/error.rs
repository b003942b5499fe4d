//! Error types for proxygemini
//!
//! This module defines the error types surfaced to callers as JSON responses.
//! Both carry the fixed CORS header set so browser clients can read them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::proxy::headers::apply_cors_headers;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing or invalid Authorization header")]
    MissingCredentials,

    #[error("Upstream fetch error: {0}")]
    UpstreamFetch(#[from] reqwest::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match &self {
            AppError::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid Authorization header",
                None,
            ),
            AppError::UpstreamFetch(source) => (
                StatusCode::BAD_GATEWAY,
                "Upstream fetch error",
                Some(source.to_string()),
            ),
        };

        let body = ErrorBody {
            error: error.to_string(),
            detail,
        };

        let mut response = (status, Json(body)).into_response();
        apply_cors_headers(response.headers_mut());
        response
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
