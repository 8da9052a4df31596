//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Liveness check
//! GET    /health/ready              - Readiness check (store reachable)
//!
//! # Admins
//! POST   /api/admins                - Create admin (201, 400, 409)
//! GET    /api/admins                - List active admins
//! GET    /api/admins/{id}           - Admin detail (404)
//! PUT    /api/admins/{id}           - Replace admin fields (400, 404, 409)
//! DELETE /api/admins/{id}           - Delete admin (204, 404)
//!
//! # Statistics
//! GET    /api/admins/statistics     - Aggregate statistics (?seniorAgeThreshold=30)
//! GET    /statistics                - Same as above
//! ```

pub mod admins;
pub mod health;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Every route, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(admins::router())
}

/// The complete application: routes, request tracing and state.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{config::ServerConfig, db::InMemoryAdminStore};

    fn test_app() -> Router {
        app(AppState::new(
            ServerConfig::in_memory(),
            Arc::new(InMemoryAdminStore::new()),
        ))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(test_app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = send(test_app(), Method::GET, "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let (status, _) = send(test_app(), Method::DELETE, "/api/admins", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_statistics_route_wins_over_id_route() {
        let (status, body) = send(test_app(), Method::GET, "/api/admins/statistics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"totalAdmins\":0"));
    }

    #[tokio::test]
    async fn test_errors_are_json() {
        let app = test_app();
        let (status, body) = send(
            app,
            Method::POST,
            "/api/admins",
            Some(r#"{"name":"A","email":"a@example.com"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["violations"][0]["field"], "age");
        assert_eq!(json["violations"][0]["message"], "Age is required");
    }
}
