//! ListRecords use case

use crate::domain::ports::RecordStore;
use crate::domain::{DomainError, ListRecordsResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Use case for listing the full dataset
#[async_trait]
pub trait ListRecords: Send + Sync {
    async fn execute(&self) -> Result<ListRecordsResponse, DomainError>;
}

/// Implementation of ListRecords use case
pub struct ListRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl ListRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ListRecords for ListRecordsUseCase {
    async fn execute(&self) -> Result<ListRecordsResponse, DomainError> {
        let records = self.store.load_all().await?;
        Ok(ListRecordsResponse { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockRecordStore;
    use crate::domain::{Record, RecordId};

    #[tokio::test]
    async fn test_list_empty_dataset() {
        let store = Arc::new(MockRecordStore::new());
        let use_case = ListRecordsUseCase::new(store);

        let result = use_case.execute().await.unwrap();
        assert!(result.records.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_order() {
        let store = Arc::new(MockRecordStore::with_records(vec![
            Record::new(RecordId::new(2), "Grace", 78.0, "B", "Math").unwrap(),
            Record::new(RecordId::new(1), "Ada", 91.0, "A", "CS").unwrap(),
        ]));
        let use_case = ListRecordsUseCase::new(store);

        let result = use_case.execute().await.unwrap();
        assert_eq!(result.records.len(), 2);
        // Backing-file order, not id order
        assert_eq!(result.records[0].name(), "Grace");
        assert_eq!(result.records[1].name(), "Ada");
    }
}
