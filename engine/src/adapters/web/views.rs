//! View handlers for the server-rendered pages
//!
//! Pages are embedded at compile time; dynamic content is substituted into
//! placeholder markers before the page is sent.

use super::charts;
use crate::adapters::rest::handlers::{error_response, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Html, Json};
use tracing::{error, info};

const VIEW_RECORDS_HTML: &str = include_str!("templates/view_records.html");
const VIEW_RECORDS_PLOTLY_HTML: &str = include_str!("templates/view_records_plotly.html");
const VIEW_STATS_PLOTLY_HTML: &str = include_str!("templates/view_stats_plotly.html");
const ADD_RECORD_HTML: &str = include_str!("templates/add_record.html");

/// Escape text destined for HTML element content
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// GET /view_records - plain HTML table of all records
pub async fn view_records(
    State(registry): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    info!("View records page requested");

    let result = registry.list_records().execute().await.map_err(|e| {
        error!(error = %e, "View records failed");
        error_response(e)
    })?;

    let mut rows = String::new();
    for record in &result.records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            record.id(),
            escape_html(record.name()),
            record.marks(),
            escape_html(record.grade()),
            escape_html(record.course()),
        ));
    }

    Ok(Html(VIEW_RECORDS_HTML.replace("__ROWS__", &rows)))
}

/// GET /view_records_plotly - dataset as an embedded Plotly table chart
pub async fn view_records_plotly(
    State(registry): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    info!("Plotly records page requested");

    let result = registry.get_record_table().execute().await.map_err(|e| {
        error!(error = %e, "Plotly records view failed");
        error_response(e)
    })?;

    let figure = charts::table_figure(&result.table);

    Ok(Html(
        VIEW_RECORDS_PLOTLY_HTML.replace("__GRAPH_JSON__", &figure.to_string()),
    ))
}

/// GET /render_stats_plotly - bar + pie stats as an embedded Plotly figure
pub async fn render_stats_plotly(
    State(registry): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    info!("Plotly stats page requested");

    let result = registry.get_dataset_stats().execute().await.map_err(|e| {
        error!(error = %e, "Plotly stats view failed");
        error_response(e)
    })?;

    let figure = charts::stats_figure(&result.course_averages, &result.grade_counts);

    Ok(Html(
        VIEW_STATS_PLOTLY_HTML.replace("__GRAPH_JSON__", &figure.to_string()),
    ))
}

/// GET /add_record - static creation form, posts to the JSON API
pub async fn add_record_form() -> Html<&'static str> {
    Html(ADD_RECORD_HTML)
}
