//! Web view router configuration

use super::views::{add_record_form, render_stats_plotly, view_records, view_records_plotly};
use crate::adapters::rest::handlers::AppState;
use axum::{routing::get, Router};

/// Build the web view router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/view_records", get(view_records))
        .route("/view_records_plotly", get(view_records_plotly))
        .route("/render_stats_plotly", get(render_stats_plotly))
        .route("/add_record", get(add_record_form))
        .with_state(state)
}
