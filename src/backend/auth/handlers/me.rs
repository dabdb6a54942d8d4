/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * The route sits behind the `auth_required` middleware, so the handler can
 * rely on the `AuthUser` extractor for a verified identity.
 */

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the identity in the token no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| BackendError::handler(StatusCode::NOT_FOUND, "user not found"))?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        email: user.email,
    }))
}
