//! RecordTable Query

use crate::domain::RecordTable;

/// Response carrying the dataset column-oriented for the table view
#[derive(Debug, Clone)]
pub struct RecordTableResponse {
    pub table: RecordTable,
}
