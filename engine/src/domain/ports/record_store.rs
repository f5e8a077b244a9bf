//! Store port for the persisted dataset
//! This is an interface - implementations are in the infrastructure layer

use crate::domain::{DomainError, Record, RecordTable};
use async_trait::async_trait;

/// Port for loading and replacing the full dataset
///
/// The backing store is a single flat file: every call reads or rewrites the
/// whole dataset. Lookups and edits happen in memory in the use cases.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load the full ordered dataset. A missing backing file is the empty
    /// dataset, not an error.
    async fn load_all(&self) -> Result<Vec<Record>, DomainError>;

    /// Replace the full dataset, overwriting the backing file
    async fn save_all(&self, records: &[Record]) -> Result<(), DomainError>;

    /// Load the dataset column-oriented for the visualization pages
    async fn load_table(&self) -> Result<RecordTable, DomainError> {
        Ok(RecordTable::from_records(&self.load_all().await?))
    }
}
