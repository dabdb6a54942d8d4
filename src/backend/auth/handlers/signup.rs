/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/sign-up.
 *
 * # Registration Process
 *
 * 1. Validate username, email, and password shape
 * 2. Reject duplicates
 * 3. Hash the password with bcrypt and create the user
 * 4. Run the post-authentication tail (cookie + JSON/redirect)
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - The duplicate error does not say which of username/email collided
 */

use crate::backend::auth::handlers::post_auth::post_authentication;
use crate::backend::auth::handlers::types::{NextQuery, SignupRequest};
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Json, Response},
};

fn valid_username(username: &str) -> bool {
    (3..=30).contains(&username.len())
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed username/email/password, or the account
///   already exists
/// * `500 Internal Server Error` - store or hashing failure
pub async fn signup(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
    headers: HeaderMap,
    Json(request): Json<SignupRequest>,
) -> Result<Response, BackendError> {
    tracing::info!("Signup request for: {}", request.username);

    if !valid_username(&request.username) {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "username must be 3-30 characters, alphanumeric or underscore",
        ));
    }
    if !request.email.contains('@') {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "invalid email address",
        ));
    }
    if request.password.len() < 8 {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "password must be at least 8 characters",
        ));
    }

    let email_taken = get_user_by_email(&state.pool, &request.email).await?.is_some();
    let username_taken = get_user_by_username(&state.pool, &request.username)
        .await?
        .is_some();
    if email_taken || username_taken {
        tracing::warn!("signup rejected, account exists: {}", request.username);
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "account already exists",
        ));
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)?;
    let user = create_user(&state.pool, request.username, request.email, password_hash).await?;

    tracing::info!("user signed up: {} ({})", user.username, user.email);

    let requested_next = query.next.as_deref().or(request.next.as_deref());
    post_authentication(&state, &headers, Some(user.id), requested_next).await
}
