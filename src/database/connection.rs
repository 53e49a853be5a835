//! Database connection manager
//!
//! Owns the SQLite pool and creates the progress table on startup.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::query;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

/// Name of the single table holding progress entries
pub const PROGRESS_TABLE: &str = "progress_online_news";

/// Database connection manager
#[derive(Debug, Clone)]
pub struct DatabaseManager {
    pub pool: SqlitePool,
}

impl DatabaseManager {
    /// Create a new database manager with the given connection URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        info!("Connecting to database: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {database_url}"))?
            .create_if_missing(true);

        // Every connection to `sqlite::memory:` opens its own database, so
        // in-memory URLs are pinned to one connection that never expires.
        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(Duration::from_secs(5))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        debug!("Successfully connected to sqlite database");

        Ok(Self { pool })
    }

    /// Create a manager over a private in-memory database
    pub async fn new_in_memory() -> Result<Self> {
        Self::new("sqlite::memory:", 1).await
    }

    /// Create the schema if it does not exist yet
    pub async fn migrate(&self) -> Result<()> {
        info!("Ensuring table {} exists", PROGRESS_TABLE);

        query(
            r#"
            CREATE TABLE IF NOT EXISTS progress_online_news (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                progress_time TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create progress table")?;

        debug!("Schema ready");
        Ok(())
    }

    /// Get connection pool size
    pub fn pool_size(&self) -> u32 {
        self.pool.size()
    }

    /// Test database connection
    pub async fn test_connection(&self) -> Result<()> {
        query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("Database connection test failed")?;

        debug!("Database connection test successful");
        Ok(())
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
