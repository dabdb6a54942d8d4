/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the process-wide `AuthConfig` and the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible defaults
 * for local development when possible. `AuthConfig` is constructed once at
 * startup and is immutable afterwards; the session-cookie lifetime is derived
 * from the JWT TTL at construction time.
 *
 * # Error Handling
 *
 * Database configuration errors are logged but do not prevent server startup
 * when no DATABASE_URL is set — the default is an on-disk SQLite file.
 */

use crate::backend::auth::cookie::{CookieOptions, SameSite};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Embedded migrations, shared by the server and the test fixtures.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// SMTP settings for the mail gateway
///
/// An empty `smtp_host` puts the gateway in no-op mode (log instead of send).
#[derive(Debug, Clone)]
pub struct MailSettings {
    /// SMTP relay hostname; empty disables sending
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// Optional SMTP credentials
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    /// Use STARTTLS instead of implicit TLS
    pub use_starttls: bool,
    /// Domain used for the no-reply From address
    pub domain: String,
}

/// Process-wide authentication configuration
///
/// Constructed once at startup from environment variables and shared behind
/// an `Arc`. Everything downstream (middleware, handlers, services) reads
/// from this; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name and attributes; the value is the signed JWT
    pub cookie: CookieOptions,
    /// HMAC secret for JWT signing
    pub secret: String,
    /// JWT time-to-live in days
    pub ttl_days: i64,
    /// Email-token time-to-live in minutes
    pub email_token_ttl_mins: i64,
    /// Login page URL; unauthenticated requests are redirected here
    pub login_url: String,
    /// Path segment of the password-reset link; the token is appended
    pub email_token_path: String,
    /// Fallback destination after login when `next` is missing or rejected
    pub login_fallback: String,
    /// Fallback destination after logout when `next` is missing or rejected
    pub logout_fallback: String,
    /// Optional allow-list of path prefixes for `next` targets;
    /// empty means any same-origin relative path
    pub allowed_next_prefixes: Vec<String>,
    /// Cookie that marks a mobile web-view session
    pub mobile_webview_cookie: String,
    /// Mail provider settings
    pub mail: MailSettings,
}

impl AuthConfig {
    /// Load configuration from the environment
    ///
    /// Every value has a development default; the only setting that warrants
    /// a startup warning is a missing `JWT_SECRET`.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using an insecure development secret");
            "insecure-dev-secret".to_string()
        });

        let ttl_days = env_i64("AUTH_TTL_DAYS", 30);
        let email_token_ttl_mins = env_i64("EMAIL_TOKEN_TTL_MINS", 10);
        let secure = std::env::var("COOKIE_SECURE").as_deref() == Ok("1");

        let cookie = CookieOptions {
            name: std::env::var("COOKIE_NAME").unwrap_or_else(|_| "session".to_string()),
            path: "/".to_string(),
            domain: None,
            secure,
            http_only: true,
            same_site: SameSite::Lax,
            // Cookie lifetime tracks the JWT TTL.
            max_age_seconds: Some((ttl_days as u64) * 24 * 60 * 60),
        };

        let mail = MailSettings {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_default(),
            smtp_port: env_i64("SMTP_PORT", 587) as u16,
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            use_starttls: std::env::var("SMTP_STARTTLS").as_deref() != Ok("0"),
            domain: std::env::var("MAIL_DOMAIN").unwrap_or_else(|_| "localhost".to_string()),
        };

        Self {
            cookie,
            secret,
            ttl_days,
            email_token_ttl_mins,
            login_url: std::env::var("LOGIN_URL").unwrap_or_else(|_| "/login".to_string()),
            email_token_path: std::env::var("EMAIL_TOKEN_PATH")
                .unwrap_or_else(|_| "/settings/reset-password/".to_string()),
            login_fallback: "/".to_string(),
            logout_fallback: "/".to_string(),
            allowed_next_prefixes: Vec::new(),
            mobile_webview_cookie: "mobile_webview".to_string(),
            mail,
        }
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment (default: local SQLite file)
/// 2. Creates a connection pool
/// 3. Runs database migrations
///
/// # Errors
///
/// Returns the sqlx error if the pool cannot be created or migrations fail;
/// the server cannot run without its token store.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:sitegate.db?mode=rwc".to_string());

    tracing::info!("Connecting to database...");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_lifetime_tracks_ttl() {
        let config = AuthConfig::from_env();
        assert_eq!(
            config.cookie.max_age_seconds,
            Some((config.ttl_days as u64) * 24 * 60 * 60)
        );
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::from_env();
        assert_eq!(config.cookie.name, "session");
        assert_eq!(config.login_url, "/login");
        assert!(config.cookie.http_only);
    }
}
