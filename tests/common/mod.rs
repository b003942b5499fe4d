//! Common test utilities for proxygemini
//!
//! This module provides the shared harness (a wiremock upstream behind the
//! real router) and reusable upstream mocks used across the integration
//! tests.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;

use axum_test::TestServer;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use proxygemini::{routes, AppState, Config, UpstreamClient};

/// Test configuration constants
pub mod constants {
    /// Proxied path used by most tests
    pub const PROXY_PATH: &str = "/proxygemini/v1/chat/completions";
    /// Path the mock upstream serves
    pub const UPSTREAM_PATH: &str = "/v1beta/openai/chat/completions";
}

/// Test harness: the real router forwarding to a fresh mock upstream
pub struct TestProxy {
    pub server: TestServer,
    pub upstream: MockServer,
}

impl TestProxy {
    /// Create a proxy wired to a fresh mock upstream
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;
        let server =
            server_for_upstream(format!("{}{}", upstream.uri(), constants::UPSTREAM_PATH));
        Self { server, upstream }
    }

    /// Requests the mock upstream has received so far
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.upstream.received_requests().await.unwrap_or_default()
    }
}

/// Build a test server whose upstream client targets `url`
pub fn server_for_upstream(url: impl Into<String>) -> TestServer {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let state = AppState::new_for_testing(
        config,
        UpstreamClient::with_url(reqwest::Client::new(), url),
    );
    let app = routes::create_router(Arc::new(state));
    TestServer::new(app).expect("Failed to create test server")
}

/// Build a test server whose upstream target refuses connections
///
/// Binds a throwaway listener to reserve a port, then drops it so nothing is
/// listening there when the proxy connects.
pub fn server_with_dead_upstream() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    server_for_upstream(format!("http://{}{}", addr, constants::UPSTREAM_PATH))
}

/// Mock upstream responses
pub mod upstream_mocks {
    use super::*;
    use serde_json::json;

    /// Successful chat completion with a canned body
    pub async fn mock_chat_completion(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path(constants::UPSTREAM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-test123",
                "object": "chat.completion",
                "created": 1706745600,
                "model": "gemini-2.0-flash",
                "choices": [
                    {
                        "index": 0,
                        "message": {
                            "role": "assistant",
                            "content": "Hello! How can I help you today?"
                        },
                        "finish_reason": "stop"
                    }
                ],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 8,
                    "total_tokens": 18
                }
            })))
            .mount(server)
            .await;
    }

    /// 200 response carrying an extra header, for relay assertions
    pub async fn mock_with_header(server: &MockServer, name: &str, value: &str) {
        Mock::given(method("POST"))
            .and(path(constants::UPSTREAM_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("ok")
                    .insert_header(name, value),
            )
            .mount(server)
            .await;
    }

    /// Upstream rejection with a JSON body, for verbatim pass-through
    pub async fn mock_error_status(server: &MockServer, status: u16) {
        Mock::given(method("POST"))
            .and(path(constants::UPSTREAM_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "code": status,
                    "message": "upstream rejected the request"
                }
            })))
            .mount(server)
            .await;
    }

    /// Answer any request with 200, for capture-based assertions
    pub async fn mock_catch_all(server: &MockServer) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(server)
            .await;
    }
}
