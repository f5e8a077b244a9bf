//! UpdateRecord use case
//! Full replacement of one record's fields under the path-supplied id

use crate::domain::ports::RecordStore;
use crate::domain::{DomainError, Record, UpdateRecordCommand, UpdateRecordResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Use case for replacing a record
#[async_trait]
pub trait UpdateRecord: Send + Sync {
    async fn execute(
        &self,
        command: UpdateRecordCommand,
    ) -> Result<UpdateRecordResponse, DomainError>;
}

/// Implementation of UpdateRecord use case
pub struct UpdateRecordUseCase {
    store: Arc<dyn RecordStore>,
    write_lock: Arc<Mutex<()>>,
}

impl UpdateRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }
}

#[async_trait]
impl UpdateRecord for UpdateRecordUseCase {
    async fn execute(
        &self,
        command: UpdateRecordCommand,
    ) -> Result<UpdateRecordResponse, DomainError> {
        Record::validate_fields(&command.name, command.marks)?;

        let _guard = self.write_lock.lock().await;

        let mut records = self.store.load_all().await?;

        let index = records
            .iter()
            .position(|r| r.id() == command.id)
            .ok_or(DomainError::RecordNotFound(command.id))?;

        // The path id names the stored record; the payload carries no id
        let record = Record::new(
            command.id,
            command.name,
            command.marks,
            command.grade,
            command.course,
        )?;
        records[index] = record.clone();
        self.store.save_all(&records).await?;

        debug!(record_id = %command.id, "Record replaced");

        Ok(UpdateRecordResponse { record })
    }
}
