/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layering
 *
 * The optional-auth middleware wraps the whole router, so every handler
 * can see the request's `AuthContext`. Routes that need a verified
 * identity additionally carry the `auth_required` gate (applied in
 * `api_routes`); the gate reuses the context the outer layer attached, so
 * tokens are verified once per request.
 */

use crate::backend::middleware::auth_optional_continue;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use axum::{middleware, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - API routes: authentication, password reset, search
/// - Static files: served from the public directory under `/static`
/// - Fallback: 404 for unknown routes
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Attach identity (when present) to every request
    let router = router.layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth_optional_continue,
    ));

    // Request/response logging
    let router = router.layer(TraceLayer::new_for_http());

    // Use AppState as router state
    router.with_state(app_state)
}
