//! Database layer
//!
//! SQLite connection management and the progress record store.

pub mod connection;
pub mod progress_store;

pub use connection::{DatabaseManager, PROGRESS_TABLE};
pub use progress_store::{ProgressStore, SqliteProgressStore, StoreError, StoreResult};
