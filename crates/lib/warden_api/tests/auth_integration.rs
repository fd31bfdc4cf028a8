//! Integration tests — register, login and `/auth/me` through the router.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Duration;
use serde_json::json;
use uuid::Uuid;

use common::{bearer_request, empty_request, json_request, send, test_app, test_app_with};

#[tokio::test]
async fn register_login_me_scenario() {
    let (_, app) = test_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/register", json!({"email": "a@x.com", "password": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "a@x.com");
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/register", json!({"email": "a@x.com", "password": "p2"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "duplicate_identity");

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/login", json!({"email": "a@x.com", "password": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);
    let token = body["access_token"].as_str().expect("access_token").to_string();

    let (status, body) = send(&app, bearer_request("/auth/me", &format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@x.com");

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/login", json!({"email": "a@x.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credential");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/auth/login",
            json!({"email": "missing@x.com", "password": "p1"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "identity_not_found");
}

#[tokio::test]
async fn register_rejects_blank_password() {
    let (store, app) = test_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/register", json!({"email": "a@x.com", "password": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(store.is_empty());
}

#[tokio::test]
async fn incomplete_or_malformed_bodies_are_validation_errors() {
    let (store, app) = test_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/register", json!({"email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].is_string());
    assert!(store.is_empty());

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/login", json!({"password": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let req = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn blank_login_email_is_a_validation_error() {
    let (_, app) = test_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/auth/login", json!({"email": "", "password": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn me_requires_a_valid_bearer_token() {
    let (_, app) = test_app();

    let (status, body) = send(&app, empty_request("GET", "/auth/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token_invalid");

    let (status, body) = send(&app, bearer_request("/auth/me", "Basic YTpi")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token_invalid");

    let (status, body) = send(&app, bearer_request("/auth/me", "Bearer not.a.token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token_invalid");
}

#[tokio::test]
async fn me_reports_vanished_subject() {
    let (store, app) = test_app();

    let (_, registered) = send(
        &app,
        json_request("POST", "/auth/register", json!({"email": "gone@x.com", "password": "p1"})),
    )
    .await;
    let (_, login) = send(
        &app,
        json_request("POST", "/auth/login", json!({"email": "gone@x.com", "password": "p1"})),
    )
    .await;
    let token = login["access_token"].as_str().expect("access_token");

    let id = Uuid::parse_str(registered["id"].as_str().expect("id")).expect("uuid");
    assert!(store.remove(id).is_some());

    let (status, body) = send(&app, bearer_request("/auth/me", &format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "subject_not_found");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let (_, app) = test_app_with(Duration::seconds(-5));

    send(
        &app,
        json_request("POST", "/auth/register", json!({"email": "a@x.com", "password": "p1"})),
    )
    .await;
    let (status, login) = send(
        &app,
        json_request("POST", "/auth/login", json!({"email": "a@x.com", "password": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["access_token"].as_str().expect("access_token");

    let (status, body) = send(&app, bearer_request("/auth/me", &format!("Bearer {token}"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "token_invalid");
}

#[tokio::test]
async fn health_reports_store_connected() {
    let (_, app) = test_app();

    let (status, body) = send(&app, empty_request("GET", "/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storeConnected"], true);
    assert_eq!(body["version"], warden_core::version());
}
