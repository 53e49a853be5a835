//! Health check endpoint

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::{AppError, AppResult};

pub fn create_health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Report service and database status
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<Value>> {
    state
        .database
        .test_connection()
        .await
        .map_err(|e| AppError::ServiceUnavailable(format!("{e:#}")))?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected",
        "connections": state.database.pool_size(),
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
