//! Progress Service
//!
//! Create/read/update/delete contract for progress records, including the
//! fetch-merge-overwrite partial update and the NotFound condition.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::database::{ProgressStore, StoreError};
use crate::logging::log_progress_change;
use crate::models::{NewProgress, ProgressRecord, ProgressUpdate};

/// Service over any progress record store
#[derive(Clone)]
pub struct ProgressService {
    store: Arc<dyn ProgressStore>,
}

impl std::fmt::Debug for ProgressService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressService").finish_non_exhaustive()
    }
}

impl ProgressService {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }

    /// Create a record; the store assigns its id
    pub async fn create_progress(
        &self,
        new: NewProgress,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        let record = self.store.insert(&new).await?;
        log_progress_change("create", record.id);
        Ok(record)
    }

    /// Read one record by id
    pub async fn get_progress(&self, id: i64) -> Result<ProgressRecord, ProgressServiceError> {
        self.store
            .fetch(id)
            .await?
            .ok_or(ProgressServiceError::NotFound(id))
    }

    /// Read every record, unordered
    pub async fn list_progress(&self) -> Result<Vec<ProgressRecord>, ProgressServiceError> {
        let records = self.store.fetch_all().await?;
        debug!(count = records.len(), "Listed progress records");
        Ok(records)
    }

    /// Apply a partial update.
    ///
    /// The stored row is fetched, merged with the provided fields, and then
    /// written back in full. A missing id performs no write.
    pub async fn update_progress(
        &self,
        id: i64,
        update: ProgressUpdate,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        let current = self.get_progress(id).await?;
        let merged = current.merged(&update);

        if !self.store.overwrite(&merged).await? {
            warn!(progress_id = id, "Progress record vanished before update");
            return Err(ProgressServiceError::NotFound(id));
        }

        log_progress_change("update", id);
        Ok(merged)
    }

    /// Delete a record and return its values from before the delete
    pub async fn delete_progress(&self, id: i64) -> Result<ProgressRecord, ProgressServiceError> {
        let current = self.get_progress(id).await?;

        if !self.store.remove(id).await? {
            warn!(progress_id = id, "Progress record vanished before delete");
            return Err(ProgressServiceError::NotFound(id));
        }

        log_progress_change("delete", id);
        Ok(current)
    }
}

/// Progress service errors
#[derive(Debug, thiserror::Error)]
pub enum ProgressServiceError {
    #[error("Progress {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
