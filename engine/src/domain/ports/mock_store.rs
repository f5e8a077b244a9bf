//! Mock store implementation for testing
//! This is a simple in-memory dataset for unit tests

use crate::domain::{DomainError, Record};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::RecordStore;

/// In-memory mock store for testing
#[derive(Clone)]
pub struct MockRecordStore {
    dataset: Arc<Mutex<Vec<Record>>>,
}

impl MockRecordStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            dataset: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock store seeded with records, bypassing the use cases
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            dataset: Arc::new(Mutex::new(records)),
        }
    }

    /// Get the current number of records stored
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.dataset.lock().unwrap().len()
    }

    /// Check if the store is empty
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.dataset.lock().unwrap().is_empty()
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn load_all(&self) -> Result<Vec<Record>, DomainError> {
        Ok(self.dataset.lock().unwrap().clone())
    }

    async fn save_all(&self, records: &[Record]) -> Result<(), DomainError> {
        *self.dataset.lock().unwrap() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;

    fn record(id: i64, name: &str) -> Record {
        Record::new(RecordId::new(id), name, 50.0, "C", "CS").unwrap()
    }

    #[tokio::test]
    async fn test_load_initially_empty() {
        let store = MockRecordStore::new();
        assert!(store.load_all().await.unwrap().is_empty());
        assert!(store.load_table().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_dataset() {
        let store = MockRecordStore::new();

        store
            .save_all(&[record(1, "Ada"), record(2, "Grace")])
            .await
            .unwrap();
        assert_eq!(store.len(), 2);

        store.save_all(&[record(2, "Grace")]).await.unwrap();
        let remaining = store.load_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name(), "Grace");
    }

    #[tokio::test]
    async fn test_load_table_matches_dataset() {
        let store = MockRecordStore::with_records(vec![record(1, "Ada"), record(2, "Grace")]);

        let table = store.load_table().await.unwrap();
        assert_eq!(table.ids, vec![1, 2]);
        assert_eq!(table.names, vec!["Ada", "Grace"]);
    }
}
