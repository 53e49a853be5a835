//! News Progress
//!
//! HTTP service keeping dated progress entries for online news work in a
//! single SQLite table.

pub mod api;
pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use app::{create_app, AppState};
pub use config::Config;
pub use database::DatabaseManager;
pub use error::{AppError, AppResult};
