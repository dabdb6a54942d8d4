//! Auth middleware integration tests
//!
//! Properties of the login-required gate and the optional-auth
//! continuation, exercised through real routes.

mod common;

use axum::http::{header, HeaderValue, StatusCode};
use common::auth_helpers::{create_test_server, create_test_user, test_state};
use common::database::TestDatabase;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_auth_required_without_token_redirects_with_encoded_next() {
    let db = TestDatabase::new().await;
    let server = create_test_server(test_state(&db));

    let response = server.get("/api/auth/me").await;

    assert!(response.status_code().is_redirection());
    assert_eq!(
        response.header("location"),
        "/login?next=%2Fapi%2Fauth%2Fme"
    );
}

#[tokio::test]
async fn test_auth_required_with_bearer_token_invokes_handler() {
    let db = TestDatabase::new().await;
    let state = test_state(&db);
    let user = create_test_user(&state, "alice", "alice@example.com", "password123").await;
    let server = create_test_server(state);

    let response = server
        .get("/api/auth/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", user.token)).unwrap(),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], user.id.to_string());
}

#[tokio::test]
async fn test_auth_required_with_cookie_token_invokes_handler() {
    let db = TestDatabase::new().await;
    let state = test_state(&db);
    let user = create_test_user(&state, "alice", "alice@example.com", "password123").await;
    let server = create_test_server(state);

    let response = server
        .get("/api/auth/me")
        .add_header(
            header::COOKIE,
            HeaderValue::from_str(&format!("session={}", user.token)).unwrap(),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_required_with_garbage_token_redirects() {
    let db = TestDatabase::new().await;
    let server = create_test_server(test_state(&db));

    // A present-but-invalid token behaves exactly like a missing one.
    let response = server
        .get("/api/auth/me")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        )
        .await;

    assert!(response.status_code().is_redirection());
    assert_eq!(
        response.header("location"),
        "/login?next=%2Fapi%2Fauth%2Fme"
    );
}

#[tokio::test]
async fn test_public_routes_pass_without_identity() {
    let db = TestDatabase::new().await;
    let server = create_test_server(test_state(&db));

    // The optional-auth layer attaches no identity and lets the request
    // through; the search endpoint does not care.
    let response = server.get("/api/search").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let db = TestDatabase::new().await;
    let server = create_test_server(test_state(&db));

    let response = server.get("/no/such/route").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
