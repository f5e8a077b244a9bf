//! Domain-level errors
//! These represent business rule violations and storage failures

use crate::domain::RecordId;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum DomainError {
    #[error("Record {0} not found")]
    RecordNotFound(RecordId),

    // Validation errors
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid marks {0}: must be between 0 and 100")]
    InvalidMarks(f64),

    // Infrastructure errors surfaced through the store port
    #[error("Storage failure: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
