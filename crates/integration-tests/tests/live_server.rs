//! Smoke tests against a running server.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied (`adminhub migrate`)
//! - The server running (`cargo run -p adminhub-server`)
//!
//! Run with: `cargo test -p adminhub-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use adminhub_integration_tests::base_url;

fn unique_email() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("smoke-{nanos}@example.com")
}

#[tokio::test]
#[ignore = "Requires running adminhub server"]
async fn test_live_health() {
    let resp = Client::new()
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running adminhub server"]
async fn test_live_admin_lifecycle() {
    let client = Client::new();
    let base_url = base_url();
    let email = unique_email();

    let resp = client
        .post(format!("{base_url}/api/admins"))
        .json(&json!({"name": "Smoke Test", "email": email, "age": 44}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let resp = client
        .post(format!("{base_url}/api/admins"))
        .json(&json!({"name": "Smoke Test", "email": email, "age": 44}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let stats: Value = client
        .get(format!("{base_url}/api/admins/statistics?seniorAgeThreshold=44"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(
        stats["seniorAdminEmails"]
            .as_array()
            .unwrap()
            .contains(&Value::String(email.clone()))
    );

    let resp = client
        .delete(format!("{base_url}/api/admins/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}/api/admins/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
