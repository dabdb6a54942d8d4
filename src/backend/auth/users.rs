/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    username: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, username, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&username)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(
    pool: &SqlitePool,
    id: uuid::Uuid,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Update a user's password hash
///
/// Used by the reset-password flow after a successful email-token
/// consumption.
pub async fn update_password_hash(
    pool: &SqlitePool,
    user_id: uuid::Uuid,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET password_hash = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, username, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(&password_hash)
    .bind(now)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Search users by username prefix
///
/// Backs the autocomplete search endpoint. Case-sensitive prefix match,
/// capped at `limit` rows.
pub async fn search_users_by_prefix(
    pool: &SqlitePool,
    prefix: &str,
    limit: i64,
) -> Result<Vec<User>, sqlx::Error> {
    let pattern = format!(
        "{}%",
        prefix.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
    );

    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE username LIKE ? ESCAPE '\'
        ORDER BY username
        LIMIT ?
        "#,
    )
    .bind(pattern)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::backend::server::config::MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let pool = test_pool().await;
        let user = create_user(
            &pool,
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
        .await
        .unwrap();

        let by_email = get_user_by_email(&pool, "alice@example.com").await.unwrap();
        assert_eq!(by_email.as_ref().map(|u| u.id), Some(user.id));

        let by_name = get_user_by_username(&pool, "alice").await.unwrap();
        assert_eq!(by_name.as_ref().map(|u| u.id), Some(user.id));

        let by_id = get_user_by_id(&pool, user.id).await.unwrap();
        assert_eq!(by_id.map(|u| u.username), Some("alice".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = test_pool().await;
        create_user(
            &pool,
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
        .await
        .unwrap();

        let dup = create_user(
            &pool,
            "alice2".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
        .await;
        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn test_update_password_hash() {
        let pool = test_pool().await;
        let user = create_user(
            &pool,
            "alice".to_string(),
            "alice@example.com".to_string(),
            "old".to_string(),
        )
        .await
        .unwrap();

        let updated = update_password_hash(&pool, user.id, "new".to_string())
            .await
            .unwrap();
        assert_eq!(updated.password_hash, "new");
    }

    #[tokio::test]
    async fn test_prefix_search() {
        let pool = test_pool().await;
        for name in ["ada", "adam", "bob"] {
            create_user(
                &pool,
                name.to_string(),
                format!("{name}@example.com"),
                "hash".to_string(),
            )
            .await
            .unwrap();
        }

        let hits = search_users_by_prefix(&pool, "ada", 10).await.unwrap();
        let names: Vec<_> = hits.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["ada", "adam"]);

        let none = search_users_by_prefix(&pool, "zz", 10).await.unwrap();
        assert!(none.is_empty());
    }
}
