//! ListRecords Query

use crate::domain::Record;

/// Response from listing the dataset
#[derive(Debug, Clone)]
pub struct ListRecordsResponse {
    /// All records, in backing-file order
    pub records: Vec<Record>,
}
