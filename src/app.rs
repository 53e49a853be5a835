//! Application wiring
//!
//! Builds the shared state once and assembles the router with its
//! middleware.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::api::{create_health_routes, create_progress_routes};
use crate::config::Config;
use crate::database::{DatabaseManager, SqliteProgressStore};
use crate::request_span;
use crate::services::ProgressService;

/// State handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub progress: Arc<ProgressService>,
    pub database: DatabaseManager,
}

impl AppState {
    /// Wire the SQLite store behind the progress service
    pub fn new(database: DatabaseManager) -> Self {
        let store = Arc::new(SqliteProgressStore::new(database.pool.clone()));
        Self {
            progress: Arc::new(ProgressService::new(store)),
            database,
        }
    }
}

/// Build the application router with all routes and middleware
pub fn create_app(config: Arc<Config>, database: DatabaseManager) -> Router {
    let router = Router::new()
        .merge(create_progress_routes())
        .merge(create_health_routes())
        .layer(cors_layer(&config));

    let router = if config.enable_request_logging {
        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| request_span!(req.method(), req.uri().path())),
        )
    } else {
        router
    };

    router.with_state(AppState::new(database))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if config.cors_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}
