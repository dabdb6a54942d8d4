//! Password-reset flow integration tests
//!
//! The forgot/reset pair end to end: token issuance on request, single-use
//! consumption, and the resulting credential change.

mod common;

use axum::http::StatusCode;
use common::auth_helpers::{create_test_server, create_test_user, test_state};
use common::database::TestDatabase;
use pretty_assertions::assert_eq;

async fn stored_tokens(db: &TestDatabase) -> Vec<String> {
    sqlx::query_scalar::<_, String>("SELECT token FROM email_tokens ORDER BY created_at")
        .fetch_all(db.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_forgot_password_issues_token_for_known_address() {
    let db = TestDatabase::new().await;
    let state = test_state(&db);
    create_test_user(&state, "alice", "alice@example.com", "password123").await;
    let server = create_test_server(state);

    let response = server
        .post("/api/auth/forgot-password")
        .json(&serde_json::json!({"email": "alice@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], true);

    // The reset link's token was persisted on the way to the mail gateway.
    assert_eq!(stored_tokens(&db).await.len(), 1);
}

#[tokio::test]
async fn test_forgot_password_is_silent_for_unknown_address() {
    let db = TestDatabase::new().await;
    let server = create_test_server(test_state(&db));

    let response = server
        .post("/api/auth/forgot-password")
        .json(&serde_json::json!({"email": "nobody@example.com"}))
        .await;

    // Same response as for a known address; no token issued.
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], true);
    assert!(stored_tokens(&db).await.is_empty());
}

#[tokio::test]
async fn test_reset_password_roundtrip() {
    let db = TestDatabase::new().await;
    let state = test_state(&db);
    create_test_user(&state, "alice", "alice@example.com", "oldpassword1").await;
    let server = create_test_server(state);

    server
        .post("/api/auth/forgot-password")
        .json(&serde_json::json!({"email": "alice@example.com"}))
        .await;
    let token = stored_tokens(&db).await.remove(0);

    let response = server
        .post("/api/auth/reset-password")
        .json(&serde_json::json!({"token": token, "password": "newpassword1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // New password works, old one does not.
    let login_new = server
        .post("/api/auth/login")
        .json(&serde_json::json!({"username": "alice", "password": "newpassword1"}))
        .await;
    assert_eq!(login_new.status_code(), StatusCode::OK);

    let login_old = server
        .post("/api/auth/login")
        .json(&serde_json::json!({"username": "alice", "password": "oldpassword1"}))
        .await;
    assert_eq!(login_old.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_token_is_single_use() {
    let db = TestDatabase::new().await;
    let state = test_state(&db);
    create_test_user(&state, "alice", "alice@example.com", "oldpassword1").await;
    let server = create_test_server(state);

    server
        .post("/api/auth/forgot-password")
        .json(&serde_json::json!({"email": "alice@example.com"}))
        .await;
    let token = stored_tokens(&db).await.remove(0);

    let first = server
        .post("/api/auth/reset-password")
        .json(&serde_json::json!({"token": token, "password": "newpassword1"}))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server
        .post("/api/auth/reset-password")
        .json(&serde_json::json!({"token": token, "password": "anotherpass2"}))
        .await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reset_with_unknown_token_fails() {
    let db = TestDatabase::new().await;
    let server = create_test_server(test_state(&db));

    let response = server
        .post("/api/auth/reset-password")
        .json(&serde_json::json!({"token": "nope", "password": "newpassword1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reset_rejects_short_password() {
    let db = TestDatabase::new().await;
    let state = test_state(&db);
    create_test_user(&state, "alice", "alice@example.com", "oldpassword1").await;
    let server = create_test_server(state);

    server
        .post("/api/auth/forgot-password")
        .json(&serde_json::json!({"email": "alice@example.com"}))
        .await;
    let token = stored_tokens(&db).await.remove(0);

    let response = server
        .post("/api/auth/reset-password")
        .json(&serde_json::json!({"token": token, "password": "short"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Validation failed before consumption; the token is still live.
    let retry = server
        .post("/api/auth/reset-password")
        .json(&serde_json::json!({"token": token, "password": "longenough1"}))
        .await;
    assert_eq!(retry.status_code(), StatusCode::OK);
}
