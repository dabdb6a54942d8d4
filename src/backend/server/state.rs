/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The SQLite connection pool (users, revoked JWTs, email tokens)
 * - The immutable auth configuration
 * - The token services and the mail gateway
 *
 * The auth orchestration owns one instance of each service for the lifetime
 * of the process; there is no cross-request mutable state beyond the pool.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they need (`State<SqlitePool>`, `State<Jwt>`, ...) without taking
 * the whole `AppState`.
 */

use crate::backend::auth::email_tokens::EmailTokens;
use crate::backend::auth::jwt::Jwt;
use crate::backend::mail::MailGateway;
use crate::backend::server::config::AuthConfig;
use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (user records and the token store)
    pub pool: SqlitePool,

    /// Process-wide auth configuration, immutable after startup
    pub config: Arc<AuthConfig>,

    /// JWT create/verify/revoke service
    pub jwt: Jwt,

    /// Single-use email token service
    pub email_tokens: EmailTokens,

    /// Outbound mail gateway
    pub mail: MailGateway,
}

impl AppState {
    /// Assemble the state from its parts
    ///
    /// The token services are derived from the configuration here so that
    /// every handler sees the same secret and TTLs.
    pub fn new(pool: SqlitePool, config: AuthConfig, mail: MailGateway) -> Self {
        let jwt = Jwt::new(pool.clone(), config.secret.clone(), config.ttl_days);
        let email_tokens = EmailTokens::new(pool.clone(), config.email_token_ttl_mins);
        Self {
            pool,
            config: Arc::new(config),
            jwt,
            email_tokens,
            mail,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<AuthConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for Jwt {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}

impl FromRef<AppState> for EmailTokens {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.email_tokens.clone()
    }
}

impl FromRef<AppState> for MailGateway {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mail.clone()
    }
}
