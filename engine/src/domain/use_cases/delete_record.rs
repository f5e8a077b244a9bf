//! DeleteRecord use case
//! Filters the record out of the dataset and rewrites the backing file

use crate::domain::ports::RecordStore;
use crate::domain::{DeleteRecordCommand, DeleteRecordResponse, DomainError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Use case for deleting a record
#[async_trait]
pub trait DeleteRecord: Send + Sync {
    async fn execute(
        &self,
        command: DeleteRecordCommand,
    ) -> Result<DeleteRecordResponse, DomainError>;
}

/// Implementation of DeleteRecord use case
pub struct DeleteRecordUseCase {
    store: Arc<dyn RecordStore>,
    write_lock: Arc<Mutex<()>>,
}

impl DeleteRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }
}

#[async_trait]
impl DeleteRecord for DeleteRecordUseCase {
    async fn execute(
        &self,
        command: DeleteRecordCommand,
    ) -> Result<DeleteRecordResponse, DomainError> {
        let _guard = self.write_lock.lock().await;

        let records = self.store.load_all().await?;

        let remaining: Vec<_> = records
            .iter()
            .filter(|r| r.id() != command.id)
            .cloned()
            .collect();

        // Nothing matched: the file is not rewritten
        if remaining.len() == records.len() {
            return Err(DomainError::RecordNotFound(command.id));
        }

        self.store.save_all(&remaining).await?;

        debug!(record_id = %command.id, remaining_records = remaining.len(), "Record deleted");

        Ok(DeleteRecordResponse { id: command.id })
    }
}
