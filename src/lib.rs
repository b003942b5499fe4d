//! proxygemini - reverse proxy for Gemini's OpenAI-compatible endpoint
//!
//! This library provides the core functionality for the proxygemini server.
//! It forwards chat-completion requests under a fixed path prefix to the
//! upstream endpoint, rewriting the Authorization header to one API key
//! chosen at random from the keys the client supplied.

pub mod auth;
pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::{UpstreamClient, CHAT_COMPLETIONS_URL};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Connection pooling only; no request timeout, which would sever
        // long-running streamed completions mid-flight
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            config,
            upstream: UpstreamClient::new(http_client),
        })
    }

    /// Create application state with the upstream pointed at a mock server
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, upstream: UpstreamClient) -> Self {
        Self { config, upstream }
    }
}
