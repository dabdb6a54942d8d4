/**
 * Email Token Service
 *
 * Short-lived single-use tokens for the password-reset flow. A token is
 * generated, mailed to the user inside a reset link, and consumed exactly
 * once when the user sets a new password.
 *
 * # Single-use guarantee
 *
 * Consumption is a single atomic UPDATE that only matches unconsumed,
 * unexpired rows; a second consumption attempt fails even before expiry.
 */

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};
use sqlx::SqlitePool;
use uuid::Uuid;

const TOKEN_LEN: usize = 32;

/// A freshly issued email token
#[derive(Debug, Clone)]
pub struct EmailToken {
    /// Opaque token string, safe to embed in a URL
    pub token: String,
}

/// Email token service
///
/// Owns the configured TTL and a handle to the token store. One instance
/// lives in the application state for the lifetime of the process.
#[derive(Clone)]
pub struct EmailTokens {
    pool: SqlitePool,
    ttl_mins: i64,
}

impl EmailTokens {
    pub fn new(pool: SqlitePool, ttl_mins: i64) -> Self {
        Self { pool, ttl_mins }
    }

    /// Generate a random single-use token and persist it
    ///
    /// The token expires `ttl_mins` minutes from now and is bound to the
    /// given user ID.
    pub async fn new_and_save(&self, user_id: Uuid) -> Result<EmailToken, sqlx::Error> {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        let now = Utc::now().timestamp();
        let expires_at = now + self.ttl_mins * 60;

        sqlx::query(
            r#"
            INSERT INTO email_tokens (token, user_id, expires_at, consumed, created_at)
            VALUES (?, ?, ?, 0, ?)
            "#,
        )
        .bind(&token)
        .bind(user_id)
        .bind(expires_at)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(EmailToken { token })
    }

    /// Consume a token and return the bound user ID
    ///
    /// Returns `Ok(None)` for unknown, expired, or already-consumed tokens;
    /// the caller cannot tell which check failed.
    pub async fn consume(&self, token: &str) -> Result<Option<Uuid>, sqlx::Error> {
        let now = Utc::now().timestamp();

        let row: Option<(Uuid,)> = sqlx::query_as(
            r#"
            UPDATE email_tokens
            SET consumed = 1
            WHERE token = ? AND consumed = 0 AND expires_at > ?
            RETURNING user_id
            "#,
        )
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(user_id,)| user_id))
    }
}
