//! Integration tests for Adminhub.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests against the in-memory store
//! cargo test -p adminhub-integration-tests
//!
//! # Tests against a running server (default http://localhost:8080)
//! ADMINHUB_BASE_URL=http://localhost:8080 cargo test -p adminhub-integration-tests -- --ignored
//! ```
//!
//! # Helpers
//!
//! - [`TestApp`] - the full router over a fresh in-memory store, driven with
//!   `tower::ServiceExt::oneshot` so no socket is bound
//! - [`base_url`] - address of an externally running server

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use adminhub_server::{
    config::ServerConfig, db::InMemoryAdminStore, routes, state::AppState,
};

/// Base URL of a running server (configurable via environment).
pub fn base_url() -> String {
    std::env::var("ADMINHUB_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Response status and body, with the body parsed as JSON when possible.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// The application router over its own empty in-memory store.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Build the app with the default in-memory configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::in_memory())
    }

    /// Build the app with a custom configuration; the store is always in-memory.
    pub fn with_config(config: ServerConfig) -> Self {
        let state = AppState::new(config, Arc::new(InMemoryAdminStore::new()));
        Self {
            router: routes::app(state.clone()),
            state,
        }
    }

    /// Shared state, for seeding or inspecting the store directly.
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<&Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("Failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    /// Send a request with a raw body and content type.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: &str,
        body: &'static str,
    ) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request")
            .status()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create an admin through the API and return its ID.
    ///
    /// # Panics
    ///
    /// Panics if the server does not answer 201 with an `id`.
    pub async fn create_admin(&self, name: &str, email: &str, age: i32) -> i64 {
        let response = self
            .post(
                "/api/admins",
                &serde_json::json!({"name": name, "email": email, "age": age}),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "create failed: {}",
            response.body
        );
        response.body["id"]
            .as_i64()
            .expect("created admin has an id")
    }
}
