//! DeleteRecord Command

use crate::domain::RecordId;

/// Command to delete a record by id
#[derive(Debug, Clone)]
pub struct DeleteRecordCommand {
    pub id: RecordId,
}

/// Response from deleting a record
#[derive(Debug, Clone)]
pub struct DeleteRecordResponse {
    pub id: RecordId,
}
