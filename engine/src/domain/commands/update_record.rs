//! UpdateRecord Command
//!
//! Full replacement of one record's fields. The id in the command comes from
//! the request path and names the stored record.

use crate::domain::{Record, RecordId};

/// Command to replace a record's fields
#[derive(Debug, Clone)]
pub struct UpdateRecordCommand {
    pub id: RecordId,
    pub name: String,
    pub marks: f64,
    pub grade: String,
    pub course: String,
}

/// Response from updating a record
#[derive(Debug, Clone)]
pub struct UpdateRecordResponse {
    /// The record as stored after the replacement
    pub record: Record,
}
