/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * configuration loading, database pool creation, service assembly, and
 * route configuration.
 *
 * # Initialization Process
 *
 * 1. Load `AuthConfig` from the environment
 * 2. Create the SQLite pool and run migrations
 * 3. Build the mail gateway (no-op when SMTP is unconfigured)
 * 4. Assemble `AppState` and the router
 */

use crate::backend::error::BackendError;
use crate::backend::mail::MailGateway;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, AuthConfig};
use crate::backend::server::state::AppState;
use axum::Router;

/// Create and configure the Axum application from the environment
///
/// # Errors
///
/// Fails when the database pool cannot be created, migrations fail, or the
/// configured SMTP relay is unusable — the server is not viable without
/// its token store.
pub async fn create_app() -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing sitegate backend server");

    let config = AuthConfig::from_env();
    let pool = load_database().await?;
    let mail = MailGateway::new(&config.mail)?;

    let app_state = AppState::new(pool, config, mail);
    Ok(create_router(app_state))
}

/// Create the application around an already-built state
///
/// Used by the integration tests, which bring their own in-memory pool and
/// a disabled mail gateway.
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    create_router(app_state)
}
