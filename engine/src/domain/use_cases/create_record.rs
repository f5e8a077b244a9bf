//! CreateRecord use case
//! Assigns the next id and appends the record to the dataset

use crate::domain::ports::RecordStore;
use crate::domain::{CreateRecordCommand, CreateRecordResponse, DomainError, Record, RecordId};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Use case for creating a new record
#[async_trait]
pub trait CreateRecord: Send + Sync {
    async fn execute(
        &self,
        command: CreateRecordCommand,
    ) -> Result<CreateRecordResponse, DomainError>;
}

/// Implementation of CreateRecord use case
pub struct CreateRecordUseCase {
    store: Arc<dyn RecordStore>,
    // Shared with the other mutating use cases: serializes each
    // read-modify-write cycle against the backing file
    write_lock: Arc<Mutex<()>>,
}

impl CreateRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>, write_lock: Arc<Mutex<()>>) -> Self {
        Self { store, write_lock }
    }
}

#[async_trait]
impl CreateRecord for CreateRecordUseCase {
    async fn execute(
        &self,
        command: CreateRecordCommand,
    ) -> Result<CreateRecordResponse, DomainError> {
        Record::validate_fields(&command.name, command.marks)?;

        let _guard = self.write_lock.lock().await;

        let mut records = self.store.load_all().await?;

        let id = records
            .iter()
            .map(Record::id)
            .max()
            .map(|id| id.next())
            .unwrap_or(RecordId::FIRST);

        let record = Record::new(id, command.name, command.marks, command.grade, command.course)?;
        records.push(record.clone());
        self.store.save_all(&records).await?;

        debug!(record_id = %id, total_records = records.len(), "Record created");

        Ok(CreateRecordResponse { record })
    }
}
