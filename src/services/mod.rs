//! Services module for News Progress
//!
//! Contains the business logic sitting between the HTTP handlers and the
//! record store.

pub mod progress_service;

// Re-export commonly used services
pub use progress_service::{ProgressService, ProgressServiceError};
