//! Shared application state and system handlers

use crate::db::UserRepository;
use axum::response::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state for handlers
///
/// The repository is the injected store capability; handlers never reach for
/// a process-wide database handle.
#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<UserRepository>,
    pub jwt_secret: Arc<String>,
    pub token_ttl_hours: i64,
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}
