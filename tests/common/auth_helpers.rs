//! Authentication test helpers
//!
//! Provides utilities for building test application state, creating test
//! users, and working with session cookies.

use super::database::TestDatabase;
use axum_test::TestServer;
use sitegate::backend::auth::cookie::{CookieOptions, SameSite};
use sitegate::backend::auth::users::create_user;
use sitegate::backend::mail::MailGateway;
use sitegate::backend::server::config::{AuthConfig, MailSettings};
use sitegate::backend::server::{create_app_with_state, AppState};

/// Test user credentials
pub struct TestUser {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// A deterministic test configuration (no environment involved)
pub fn test_config() -> AuthConfig {
    AuthConfig {
        cookie: CookieOptions {
            name: "session".to_string(),
            path: "/".to_string(),
            domain: None,
            secure: false,
            http_only: true,
            same_site: SameSite::Lax,
            max_age_seconds: Some(30 * 24 * 60 * 60),
        },
        secret: "test-secret".to_string(),
        ttl_days: 30,
        email_token_ttl_mins: 10,
        login_url: "/login".to_string(),
        email_token_path: "/settings/reset-password/".to_string(),
        login_fallback: "/".to_string(),
        logout_fallback: "/".to_string(),
        allowed_next_prefixes: Vec::new(),
        mobile_webview_cookie: "mobile_webview".to_string(),
        mail: MailSettings {
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            use_starttls: true,
            domain: "test.local".to_string(),
        },
    }
}

/// Build application state over a test database
pub fn test_state(db: &TestDatabase) -> AppState {
    AppState::new(db.pool().clone(), test_config(), MailGateway::disabled())
}

/// Build a test server over application state
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::builder()
        .http_transport()
        .build(create_app_with_state(state))
        .expect("Failed to start test server")
}

/// Create a test user in the database with a valid session token
pub async fn create_test_user(
    state: &AppState,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("bcrypt hash");
    let user = create_user(
        &state.pool,
        username.to_string(),
        email.to_string(),
        password_hash,
    )
    .await
    .expect("create user");

    let token = state.jwt.create(user.id).expect("create token");

    TestUser {
        id: user.id,
        username: user.username,
        email: user.email,
        password: password.to_string(),
        token,
    }
}

/// Extract the session token from a `Set-Cookie` header value
pub fn session_token_from_set_cookie(set_cookie: &str) -> String {
    set_cookie
        .strip_prefix("session=")
        .expect("session cookie")
        .split(';')
        .next()
        .expect("cookie value")
        .to_string()
}
