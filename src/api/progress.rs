//! Progress API Endpoints
//!
//! REST endpoints for creating, reading, updating and deleting progress
//! records.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use super::extractors::{ApiJson, ApiPath};
use crate::app::AppState;
use crate::error::AppResult;
use crate::models::{NewProgress, ProgressRecord, ProgressUpdate};

/// Create progress API routes
pub fn create_progress_routes() -> Router<AppState> {
    Router::new()
        .route("/progress", get(list_progress).post(create_progress))
        .route(
            "/progress/:id",
            get(get_progress).put(update_progress).delete(delete_progress),
        )
}

/// Create a progress entry
pub async fn create_progress(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewProgress>,
) -> AppResult<(StatusCode, Json<ProgressRecord>)> {
    let record = state.progress.create_progress(new).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Get a progress entry by id
pub async fn get_progress(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ProgressRecord>> {
    let record = state.progress.get_progress(id).await?;
    Ok(Json(record))
}

/// Get all progress entries
pub async fn list_progress(State(state): State<AppState>) -> AppResult<Json<Vec<ProgressRecord>>> {
    let records = state.progress.list_progress().await?;
    Ok(Json(records))
}

/// Update the provided fields of a progress entry
pub async fn update_progress(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(update): ApiJson<ProgressUpdate>,
) -> AppResult<Json<ProgressRecord>> {
    let record = state.progress.update_progress(id, update).await?;
    Ok(Json(record))
}

/// Delete a progress entry, echoing its last stored values
pub async fn delete_progress(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ProgressRecord>> {
    let record = state.progress.delete_progress(id).await?;
    Ok(Json(record))
}
