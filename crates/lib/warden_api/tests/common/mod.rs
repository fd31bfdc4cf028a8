//! Shared helpers: router over in-memory stores and a oneshot request runner.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;
use warden_api::{AppState, config::ApiConfig};
use warden_core::auth::memory::MemoryIdentityStore;
use warden_core::profile::memory::MemoryProfileRepository;

pub fn test_config(token_lifetime: Duration) -> ApiConfig {
    ApiConfig {
        database_url: "postgres://localhost:5432/warden_test".into(),
        jwt_secret: "test-secret".into(),
        token_lifetime,
    }
}

/// Router plus a handle on its identity store for out-of-band changes.
pub fn test_app_with(token_lifetime: Duration) -> (Arc<MemoryIdentityStore>, Router) {
    let identities = Arc::new(MemoryIdentityStore::new());
    let state = AppState::new(
        &test_config(token_lifetime),
        identities.clone(),
        Arc::new(MemoryProfileRepository::new()),
    );
    (identities, warden_api::router(state))
}

pub fn test_app() -> (Arc<MemoryIdentityStore>, Router) {
    test_app_with(Duration::hours(1))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn bearer_request(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

/// Run one request and decode the JSON body (`Null` when not JSON).
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
