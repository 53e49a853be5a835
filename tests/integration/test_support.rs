//! Helpers for building a test server

use std::sync::Arc;

use axum_test::TestServer;
use news_progress::{create_app, Config, DatabaseManager};
use serde_json::{json, Value};

/// Router over a fresh in-memory database
pub async fn create_test_server() -> TestServer {
    let config = Config::for_test();
    let db = DatabaseManager::new_in_memory().await.unwrap();
    db.migrate().await.unwrap();

    TestServer::new(create_app(Arc::new(config), db)).unwrap()
}

/// POST a record and return the response body
pub async fn create_progress(server: &TestServer, name: &str, progress_time: &str) -> Value {
    let response = server
        .post("/progress")
        .json(&json!({"name": name, "progress_time": progress_time}))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json()
}
