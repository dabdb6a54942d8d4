/**
 * API Route Handlers
 *
 * This module defines route handlers for API endpoints:
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/sign-up` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user info (requires authentication)
 * - `POST /api/auth/forgot-password` - Send a password-reset link
 * - `POST /api/auth/reset-password` - Consume a reset token
 * - `GET /logout` - Clear session, revoke token, redirect
 *
 * ## Search
 * - `GET /api/search` - Autocomplete search
 */

use crate::backend::auth::{
    forgot_password, get_me, login, logout, reset_password, signup,
};
use crate::backend::middleware::auth_required;
use crate::backend::search::search;
use crate::backend::server::state::AppState;
use axum::{middleware, Router};

/// Configure API routes
///
/// # Authentication
///
/// `/api/auth/me` sits behind the `auth_required` gate; an unauthenticated
/// request is redirected to the login page with the original URL in
/// `next`. Everything else is public — login, signup, and the reset flow
/// must be reachable without a session, and logout degrades to a plain
/// redirect when no token is presented.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router
        // Authentication endpoints
        .route(
            "/api/auth/me",
            axum::routing::get(get_me)
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_required)),
        )
        .route("/api/auth/sign-up", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        .route(
            "/api/auth/forgot-password",
            axum::routing::post(forgot_password),
        )
        .route(
            "/api/auth/reset-password",
            axum::routing::post(reset_password),
        )
        .route("/logout", axum::routing::get(logout))
        // Search endpoint for the client autocomplete box
        .route("/api/search", axum::routing::get(search))
}
