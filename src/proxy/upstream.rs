//! Upstream forwarding client
//!
//! Issues the rewritten request against the fixed Gemini OpenAI-compatibility
//! endpoint and relays the response. Both bodies are streamed; nothing is
//! buffered in full.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Response};
use tracing::{debug, error, info, instrument};

use crate::error::AppResult;
use crate::proxy::headers::apply_cors_headers;

/// The fixed upstream target. Deliberately not configurable at runtime.
pub const CHAT_COMPLETIONS_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";

/// Client for the fixed upstream endpoint
pub struct UpstreamClient {
    client: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Create a client targeting the production endpoint
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            url: CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    /// Create a client targeting an arbitrary URL, for tests against a mock
    /// upstream
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_url(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Forward a request to the upstream and relay its response
    ///
    /// The inbound body is streamed to the upstream (omitted entirely for
    /// GET/HEAD), and the upstream body is streamed back. Upstream HTTP
    /// errors relay verbatim; only transport failures surface as errors.
    #[instrument(skip(self, headers, body), fields(method = %method))]
    pub async fn forward(
        &self,
        method: Method,
        headers: HeaderMap,
        body: Body,
    ) -> AppResult<Response<Body>> {
        info!(url = %self.url, method = %method, "Forwarding request to upstream");

        let mut request_builder = self.client.request(method.clone(), &self.url).headers(headers);

        // Only attach a body for methods that carry one
        if method != Method::GET && method != Method::HEAD {
            request_builder =
                request_builder.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        let response = request_builder.send().await.map_err(|e| {
            error!(url = %self.url, error = %e, "Failed to reach upstream");
            e
        })?;

        let status = response.status();
        debug!(status = %status, "Received upstream response");

        let mut headers = response.headers().clone();
        apply_cors_headers(&mut headers);

        let mut relayed = Response::new(Body::from_stream(response.bytes_stream()));
        *relayed.status_mut() = status;
        *relayed.headers_mut() = headers;
        Ok(relayed)
    }
}
