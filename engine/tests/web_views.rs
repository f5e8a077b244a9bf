//! End-to-end tests for the server-rendered pages
//!
//! Uses the merged REST+web router the daemon serves, seeding data through
//! the JSON API and asserting on the rendered pages.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use gb_engine::adapters::{rest, web};
use gb_engine::application::UseCaseRegistry;
use gb_engine::infrastructure::CsvRecordStore;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app(dir: &TempDir) -> Router {
    let store = Arc::new(CsvRecordStore::new(dir.path().join("data.csv")));
    let registry = Arc::new(UseCaseRegistry::new(store));
    rest::build_router(registry.clone()).merge(web::build_router(registry))
}

async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn seed_record(app: &Router, name: &str, marks: f64, grade: &str, course: &str) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "name": name, "marks": marks, "grade": grade, "course": course })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_view_records_lists_dataset() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    seed_record(&app, "Ada", 91.0, "A", "CS").await;
    seed_record(&app, "Grace", 78.0, "B", "Math").await;

    let (status, page) = get_page(&app, "/view_records").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<td>Ada</td>"));
    assert!(page.contains("<td>Grace</td>"));
    assert!(page.contains("<td>Math</td>"));
}

#[tokio::test]
async fn test_view_records_escapes_markup() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    seed_record(&app, "<b>Ada</b>", 91.0, "A", "CS").await;

    let (status, page) = get_page(&app, "/view_records").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("&lt;b&gt;Ada&lt;/b&gt;"));
    assert!(!page.contains("<b>Ada</b>"));
}

#[tokio::test]
async fn test_view_records_plotly_embeds_table_figure() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    seed_record(&app, "Ada", 91.0, "A", "CS").await;

    let (status, page) = get_page(&app, "/view_records_plotly").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Plotly.newPlot"));
    assert!(page.contains("\"table\""));
    assert!(page.contains("paleturquoise"));
    assert!(page.contains("Ada"));
    // The placeholder was substituted
    assert!(!page.contains("__GRAPH_JSON__"));
}

#[tokio::test]
async fn test_render_stats_plotly_embeds_bar_and_pie() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    seed_record(&app, "Ada", 90.0, "A", "CS").await;
    seed_record(&app, "Grace", 70.0, "B", "CS").await;

    let (status, page) = get_page(&app, "/render_stats_plotly").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("\"bar\""));
    assert!(page.contains("\"pie\""));
    assert!(page.contains("Grade Distribution"));
    assert!(!page.contains("__GRAPH_JSON__"));
}

#[tokio::test]
async fn test_views_render_on_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    for uri in ["/view_records", "/view_records_plotly", "/render_stats_plotly"] {
        let (status, _) = get_page(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{} failed on empty dataset", uri);
    }
}

#[tokio::test]
async fn test_add_record_form_renders() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, page) = get_page(&app, "/add_record").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<form"));
    assert!(page.contains("/api/data"));
}
