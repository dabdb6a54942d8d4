/**
 * JWT Service
 *
 * This module issues, verifies, and revokes the JWTs that back user
 * sessions. Tokens are HS256-signed with the configured secret and embed
 * the user ID and an expiry derived from the configured TTL.
 *
 * # Revocation
 *
 * Logout revokes the presented token: its SHA-256 hash is recorded in the
 * `revoked_tokens` table together with the token's own expiry, and a token
 * whose hash is present never verifies again. Rows past their expiry can be
 * purged at any time without changing behavior.
 *
 * # Security
 *
 * Malformed, expired, and revoked tokens all verify to "no identity" —
 * callers cannot tell which check failed. Only token-store I/O failures
 * surface as errors.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Session token service
///
/// Owns the signing secret, the configured TTL, and a handle to the
/// revocation store. One instance lives in the application state for the
/// lifetime of the process.
#[derive(Clone)]
pub struct Jwt {
    pool: SqlitePool,
    secret: String,
    ttl_days: i64,
}

impl Jwt {
    pub fn new(pool: SqlitePool, secret: impl Into<String>, ttl_days: i64) -> Self {
        Self {
            pool,
            secret: secret.into(),
            ttl_days,
        }
    }

    /// Create a JWT for a user
    ///
    /// Signs claims embedding the user ID and an expiry of now + TTL.
    /// No side effect beyond token generation.
    pub fn create(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp() as u64;
        let exp = now + (self.ttl_days as u64) * 24 * 60 * 60;

        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now,
        };

        let key = EncodingKey::from_secret(self.secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    /// Verify a token and return the embedded user ID
    ///
    /// Returns `Ok(Some(user_id))` only when the signature checks out, the
    /// token is unexpired, and the token has not been revoked. Every
    /// validation failure collapses to `Ok(None)`; the caller must treat
    /// absence of identity uniformly.
    ///
    /// # Errors
    ///
    /// Only revocation-store I/O failures are returned as `Err`.
    pub async fn verify(&self, token: &str) -> Result<Option<Uuid>, sqlx::Error> {
        let key = DecodingKey::from_secret(self.secret.as_ref());
        let claims = match decode::<Claims>(token, &key, &Validation::default()) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("token failed validation: {:?}", e);
                return Ok(None);
            }
        };

        let user_id = match Uuid::parse_str(&claims.sub) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("token carries a malformed user id: {:?}", e);
                return Ok(None);
            }
        };

        if self.is_revoked(token).await? {
            tracing::debug!("token is revoked");
            return Ok(None);
        }

        Ok(Some(user_id))
    }

    /// Revoke a token
    ///
    /// Records the token hash so the token no longer validates even if
    /// otherwise unexpired. Idempotent; revoking an unparseable token is
    /// harmless and still recorded.
    pub async fn revoke(&self, token: &str) -> Result<(), sqlx::Error> {
        let now = Utc::now().timestamp();

        // Recover the token's own expiry so the blacklist row can age out
        // with it. Signature is still required; only expiry is skipped, so
        // an already-expired token can be revoked during logout.
        let mut validation = Validation::default();
        validation.validate_exp = false;
        let key = DecodingKey::from_secret(self.secret.as_ref());
        let expires_at = decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims.exp as i64)
            .unwrap_or(now + self.ttl_days * 24 * 60 * 60);

        sqlx::query(
            r#"
            INSERT OR IGNORE INTO revoked_tokens (token_hash, expires_at, revoked_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(sha256_hash(token))
        .bind(expires_at)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM revoked_tokens WHERE token_hash = ?")
                .bind(sha256_hash(token))
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }
}

/// Hash a token using SHA-256
fn sha256_hash(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
