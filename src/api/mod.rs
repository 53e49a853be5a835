//! API module for News Progress
//!
//! Contains all REST API endpoints and routing.

mod extractors;
pub mod health;
pub mod progress;

pub use health::create_health_routes;
pub use progress::create_progress_routes;
