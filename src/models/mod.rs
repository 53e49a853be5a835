//! Models module for News Progress
//!
//! Contains all data models and their merge logic.

pub mod progress;

// Re-export commonly used types
pub use progress::{NewProgress, ProgressRecord, ProgressUpdate};
