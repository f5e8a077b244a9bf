//! GetRecordTable use case
//! Columnar load backing the table view

use crate::domain::ports::RecordStore;
use crate::domain::{DomainError, RecordTableResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Use case for loading the dataset column-oriented
#[async_trait]
pub trait GetRecordTable: Send + Sync {
    async fn execute(&self) -> Result<RecordTableResponse, DomainError>;
}

/// Implementation of GetRecordTable use case
pub struct GetRecordTableUseCase {
    store: Arc<dyn RecordStore>,
}

impl GetRecordTableUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetRecordTable for GetRecordTableUseCase {
    async fn execute(&self) -> Result<RecordTableResponse, DomainError> {
        let table = self.store.load_table().await?;
        Ok(RecordTableResponse { table })
    }
}
