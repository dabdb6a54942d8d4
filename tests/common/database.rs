//! Database test fixtures and utilities
//!
//! Provides an in-memory SQLite database with migrations applied, so the
//! integration suite runs without external infrastructure.

use sitegate::backend::server::config::MIGRATOR;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Test database fixture
///
/// A single-connection in-memory SQLite pool. Each fixture is a fresh,
/// isolated database; clones of the pool share the same connection and
/// therefore the same data.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");

        MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
