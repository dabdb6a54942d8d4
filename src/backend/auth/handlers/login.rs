/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username (or email when the input contains `@`)
 * 2. Verify password using bcrypt
 * 3. Run the post-authentication tail (cookie + JSON/redirect)
 *
 * # Security
 *
 * - Unknown user and wrong password produce the same 401 — no user
 *   enumeration through error bodies or status codes
 * - Passwords are never logged or returned in responses
 */

use crate::backend::auth::handlers::post_auth::post_authentication;
use crate::backend::auth::handlers::types::{LoginRequest, NextQuery};
use crate::backend::auth::users::{get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Json, Response},
};
use bcrypt::verify;

/// Login handler
///
/// Verifies the submitted credentials and, on success, finishes through
/// the post-authentication tail: session cookie plus JSON payload or
/// redirect.
///
/// # Errors
///
/// * `401 Unauthorized` - user not found or password incorrect
///   (indistinguishable by design)
/// * `500 Internal Server Error` - store or hashing failure
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<Response, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    // Email lookup when the input looks like one, else username.
    let user = if request.username.contains('@') {
        get_user_by_email(&state.pool, &request.username).await?
    } else {
        get_user_by_username(&state.pool, &request.username).await?
    };

    let Some(user) = user else {
        tracing::warn!("login failed for: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            "invalid credentials",
        ));
    };

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("login failed for: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            "invalid credentials",
        ));
    }

    tracing::info!("user logged in: {} ({})", user.username, user.email);

    let requested_next = query.next.as_deref().or(request.next.as_deref());
    post_authentication(&state, &headers, Some(user.id), requested_next).await
}
