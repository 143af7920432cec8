//! Common test utilities for in-process API testing.
//!
//! Builds the router with a real integration pointed at a `wiremock`
//! server standing in for the support API.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use support_tickets_core::{Config, SupportApiConfig, SupportTicketsIntegration};
use support_tickets_server::{api::create_router, state::AppState};

/// Test fixture with an in-process router and a mock support API.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock support API - mount responses on it
    pub support_api: MockServer,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture whose integration targets the mock support API.
    pub async fn new() -> Self {
        let support_api = MockServer::start().await;
        let api_config = SupportApiConfig {
            url: support_api.uri(),
            token: Some("test-token".to_string()),
            timeout_ms: 2_000,
            ..Default::default()
        };
        Self::with_api_config(support_api, api_config)
    }

    /// Create a fixture with a custom support API configuration.
    pub fn with_api_config(support_api: MockServer, api_config: SupportApiConfig) -> Self {
        let config = Config {
            support_api: api_config.clone(),
            ..Default::default()
        };
        let integration = Arc::new(
            SupportTicketsIntegration::new(api_config).expect("Failed to create integration"),
        );
        let state = Arc::new(AppState::new(config, integration));

        Self {
            router: create_router(state),
            support_api,
        }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).into_owned())
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Whether `value` is a string shaped like a generated fallback ticket id.
pub fn is_fallback_id(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(support_tickets_core::is_fallback_ticket_id)
}
