//! Progress record store
//!
//! `ProgressStore` is the persistence seam the service depends on. Each
//! method is a single SQL statement against `progress_online_news`.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use tracing::Instrument;

use crate::db_span;
use crate::models::{NewProgress, ProgressRecord};

/// Errors surfaced by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations over progress records
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Insert a new row and return it with its assigned id
    async fn insert(&self, new: &NewProgress) -> StoreResult<ProgressRecord>;

    /// Fetch one row by id
    async fn fetch(&self, id: i64) -> StoreResult<Option<ProgressRecord>>;

    /// Fetch every row, in no particular order
    async fn fetch_all(&self) -> StoreResult<Vec<ProgressRecord>>;

    /// Write every column of `record` to the row with the same id.
    /// Returns false when no such row exists.
    async fn overwrite(&self, record: &ProgressRecord) -> StoreResult<bool>;

    /// Delete the row with this id. Returns false when no such row exists.
    async fn remove(&self, id: i64) -> StoreResult<bool>;
}

/// SQLite-backed store
#[derive(Debug, Clone)]
pub struct SqliteProgressStore {
    pool: SqlitePool,
}

impl SqliteProgressStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressStore for SqliteProgressStore {
    async fn insert(&self, new: &NewProgress) -> StoreResult<ProgressRecord> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO progress_online_news (name, progress_time) VALUES (?, ?) RETURNING id",
        )
        .bind(&new.name)
        .bind(new.progress_time)
        .fetch_one(&self.pool)
        .instrument(db_span!("insert", "progress_online_news"))
        .await?;

        Ok(ProgressRecord::from_new(id, new.clone()))
    }

    async fn fetch(&self, id: i64) -> StoreResult<Option<ProgressRecord>> {
        let row = sqlx::query_as::<_, ProgressRecord>(
            "SELECT id, name, progress_time FROM progress_online_news WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .instrument(db_span!("select", "progress_online_news"))
        .await?;

        Ok(row)
    }

    async fn fetch_all(&self) -> StoreResult<Vec<ProgressRecord>> {
        let rows = sqlx::query_as::<_, ProgressRecord>(
            "SELECT id, name, progress_time FROM progress_online_news",
        )
        .fetch_all(&self.pool)
        .instrument(db_span!("select_all", "progress_online_news"))
        .await?;

        Ok(rows)
    }

    async fn overwrite(&self, record: &ProgressRecord) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE progress_online_news SET name = ?, progress_time = ? WHERE id = ?",
        )
        .bind(&record.name)
        .bind(record.progress_time)
        .bind(record.id)
        .execute(&self.pool)
        .instrument(db_span!("update", "progress_online_news"))
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM progress_online_news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .instrument(db_span!("delete", "progress_online_news"))
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
