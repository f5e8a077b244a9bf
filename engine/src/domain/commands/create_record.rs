//! CreateRecord Command
//!
//! Command data structure for creating a new record.
//! The id is assigned by the service, never supplied by the client.

use crate::domain::Record;

/// Command to create a new record
#[derive(Debug, Clone)]
pub struct CreateRecordCommand {
    pub name: String,
    pub marks: f64,
    pub grade: String,
    pub course: String,
}

/// Response from creating a record
#[derive(Debug, Clone)]
pub struct CreateRecordResponse {
    /// The stored record, including its assigned id
    pub record: Record,
}
