//! Logging configuration for News Progress
//!
//! Structured logging setup with appropriate levels and formatting.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

use crate::config::{Config, LogFormat};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(log_level: &str) -> String {
    format!("news_progress={log_level},tower_http={log_level},axum::rejection=trace")
}

/// Initialize the application logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
pub fn init_logging(config: &Config) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let output = match config.log_format {
        LogFormat::Json => json_layer(),
        LogFormat::Compact => console_layer(),
    };

    Registry::default().with(output).with(env_filter).try_init()?;

    tracing::info!(format = %config.log_format, "Logging system initialized");
    Ok(())
}

/// JSON logging layer for production
fn json_layer() -> Box<dyn Layer<Registry> + Send + Sync> {
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .boxed()
}

/// Console logging layer for development
fn console_layer() -> Box<dyn Layer<Registry> + Send + Sync> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true)
        .boxed()
}

/// Create a span for request logging
#[macro_export]
macro_rules! request_span {
    ($method:expr, $path:expr) => {
        tracing::info_span!(
            "http_request",
            method = %$method,
            path = %$path,
        )
    };
}

/// Create a span for database operations
#[macro_export]
macro_rules! db_span {
    ($operation:expr, $table:expr) => {
        tracing::debug_span!(
            "database_operation",
            operation = %$operation,
            table = %$table,
        )
    };
}

/// Log application startup
pub fn log_startup(config: &Config) {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "News Progress starting up"
    );
}

/// Log a record-level change
pub fn log_progress_change(operation: &str, id: i64) {
    tracing::info!(operation = %operation, progress_id = id, "Progress record changed");
}
