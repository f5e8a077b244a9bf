//! GetRecord Query

use crate::domain::{Record, RecordId};

/// Query for a single record by id
#[derive(Debug, Clone)]
pub struct GetRecordQuery {
    pub id: RecordId,
}

/// Response from looking up a record
#[derive(Debug, Clone)]
pub struct GetRecordResponse {
    pub record: Record,
}
