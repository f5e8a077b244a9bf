//! REST API router configuration

use super::handlers::{
    create_record, delete_record, get_record, health, list_records, update_record, AppState,
};
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// Build the REST API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/api/health", get(health))
        // Record CRUD
        .route("/api/data", post(create_record))
        .route("/api/data", get(list_records))
        .route("/api/data/:id", get(get_record))
        .route("/api/data/:id", put(update_record))
        .route("/api/data/:id", delete(delete_record))
        .with_state(state)
}
