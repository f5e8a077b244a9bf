//! GetRecord use case

use crate::domain::ports::RecordStore;
use crate::domain::{DomainError, GetRecordQuery, GetRecordResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Use case for looking up a single record by id
#[async_trait]
pub trait GetRecord: Send + Sync {
    async fn execute(&self, query: GetRecordQuery) -> Result<GetRecordResponse, DomainError>;
}

/// Implementation of GetRecord use case
pub struct GetRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl GetRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetRecord for GetRecordUseCase {
    async fn execute(&self, query: GetRecordQuery) -> Result<GetRecordResponse, DomainError> {
        let records = self.store.load_all().await?;

        // Linear scan: the dataset has no indexes
        let record = records
            .into_iter()
            .find(|r| r.id() == query.id)
            .ok_or(DomainError::RecordNotFound(query.id))?;

        Ok(GetRecordResponse { record })
    }
}
