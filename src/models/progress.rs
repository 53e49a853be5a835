//! Progress Record Model
//!
//! A named progress entry stamped with a calendar date, plus the input
//! shapes used to create and partially update one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored progress entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProgressRecord {
    /// Identifier assigned by the store on creation
    pub id: i64,

    pub name: String,

    /// ISO-8601 date, stored as `YYYY-MM-DD` text
    pub progress_time: NaiveDate,
}

/// Request body for creating a progress entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProgress {
    pub name: String,
    pub progress_time: NaiveDate,
}

/// Request body for a partial update.
///
/// An absent key and an explicit `null` both mean "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub progress_time: Option<NaiveDate>,
}

impl ProgressRecord {
    /// Attach a store-assigned identifier to submitted fields
    pub fn from_new(id: i64, new: NewProgress) -> Self {
        Self {
            id,
            name: new.name,
            progress_time: new.progress_time,
        }
    }

    /// Apply a partial update, returning the full record to write back.
    ///
    /// Provided fields replace the stored value; omitted fields keep it.
    /// The identifier never changes.
    #[must_use]
    pub fn merged(&self, update: &ProgressUpdate) -> Self {
        Self {
            id: self.id,
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            progress_time: update.progress_time.unwrap_or(self.progress_time),
        }
    }
}
