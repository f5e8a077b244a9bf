//! REST API handlers using axum

use crate::application::UseCaseRegistry;
use crate::domain::{
    CreateRecordCommand, DeleteRecordCommand, DomainError, GetRecordQuery, Record, RecordId,
    UpdateRecordCommand,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shared application state
pub type AppState = Arc<UseCaseRegistry>;

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Simple success response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create/update request body: a record without its id
#[derive(Debug, Deserialize)]
pub struct RecordPayload {
    pub name: String,
    pub marks: f64,
    pub grade: String,
    pub course: String,
}

/// Map a domain error to its HTTP representation
///
/// The not-found body is a fixed string; clients match on it.
pub(crate) fn error_response(err: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match &err {
        DomainError::RecordNotFound(_) => {
            (StatusCode::NOT_FOUND, "Record not found".to_string())
        }
        DomainError::InvalidName(_) | DomainError::InvalidMarks(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        DomainError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    (status, Json(ErrorResponse { error: message }))
}

// ===== Handlers =====

/// GET /api/health - liveness probe, no dataset dependency
pub async fn health() -> &'static str {
    "The application is up"
}

/// GET /api/data - list all records
pub async fn list_records(
    State(registry): State<AppState>,
) -> Result<Json<Vec<Record>>, (StatusCode, Json<ErrorResponse>)> {
    info!("REST List request");

    let result = registry.list_records().execute().await.map_err(|e| {
        error!(error = %e, "List records failed");
        error_response(e)
    })?;

    debug!(count = result.records.len(), "Records listed");

    Ok(Json(result.records))
}

/// GET /api/data/:id - get a single record
pub async fn get_record(
    State(registry): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Record>, (StatusCode, Json<ErrorResponse>)> {
    info!(record_id = id, "REST Get request");

    let query = GetRecordQuery {
        id: RecordId::new(id),
    };

    let result = registry.get_record().execute(query).await.map_err(|e| {
        error!(error = %e, "Get record failed");
        error_response(e)
    })?;

    debug!(record_id = id, "Record retrieved");

    Ok(Json(result.record))
}

/// POST /api/data - create a new record
pub async fn create_record(
    State(registry): State<AppState>,
    Json(payload): Json<RecordPayload>,
) -> Result<(StatusCode, Json<Record>), (StatusCode, Json<ErrorResponse>)> {
    info!(name = %payload.name, course = %payload.course, "REST Create request");

    let command = CreateRecordCommand {
        name: payload.name,
        marks: payload.marks,
        grade: payload.grade,
        course: payload.course,
    };

    let result = registry.create_record().execute(command).await.map_err(|e| {
        error!(error = %e, "Create record failed");
        error_response(e)
    })?;

    debug!(record_id = %result.record.id(), "Record created");

    Ok((StatusCode::CREATED, Json(result.record)))
}

/// PUT /api/data/:id - full replacement of a record's fields
///
/// The path id names the stored record; the payload carries no id.
pub async fn update_record(
    State(registry): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RecordPayload>,
) -> Result<Json<Record>, (StatusCode, Json<ErrorResponse>)> {
    info!(record_id = id, "REST Update request");

    let command = UpdateRecordCommand {
        id: RecordId::new(id),
        name: payload.name,
        marks: payload.marks,
        grade: payload.grade,
        course: payload.course,
    };

    let result = registry.update_record().execute(command).await.map_err(|e| {
        error!(error = %e, "Update record failed");
        error_response(e)
    })?;

    debug!(record_id = id, "Record updated");

    Ok(Json(result.record))
}

/// DELETE /api/data/:id - delete a record
pub async fn delete_record(
    State(registry): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(record_id = id, "REST Delete request");

    let command = DeleteRecordCommand {
        id: RecordId::new(id),
    };

    registry.delete_record().execute(command).await.map_err(|e| {
        error!(error = %e, "Delete record failed");
        error_response(e)
    })?;

    debug!(record_id = id, "Record deleted");

    Ok(Json(MessageResponse {
        message: "Record deleted successfully".to_string(),
    }))
}
