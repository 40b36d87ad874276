//! API routes

use crate::api::handlers::{health_check, AppState};
use crate::auth::handlers::{
    delete_user, get_session, get_user, login, logout, register, update_name, update_password,
};
use axum::{
    routing::{get, patch, post},
    Router,
};

/// Build the API routes
///
/// Protected endpoints authenticate through the extractors on their
/// handlers; there is no separate auth middleware layer.
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        // Public endpoints
        .route("/health", get(health_check))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        // Bearer-token endpoints
        .route("/api/user", get(get_user).delete(delete_user))
        .route("/api/user/name", patch(update_name))
        .route("/api/user/password", patch(update_password))
        // Cookie endpoint
        .route("/api/session", get(get_session))
        .with_state(state)
}
