//! Use Case Registry
//! Central composition root for all use cases (Dependency Injection container)

use crate::domain::ports::RecordStore;
use crate::domain::use_cases::{
    CreateRecord, CreateRecordUseCase, DeleteRecord, DeleteRecordUseCase, GetDatasetStats,
    GetDatasetStatsUseCase, GetRecord, GetRecordUseCase, GetRecordTable, GetRecordTableUseCase,
    ListRecords, ListRecordsUseCase, UpdateRecord, UpdateRecordUseCase,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Registry for all application use cases
/// This is the composition root where dependencies are wired together
pub struct UseCaseRegistry {
    // Command use cases (modify state)
    create_record: Arc<dyn CreateRecord>,
    update_record: Arc<dyn UpdateRecord>,
    delete_record: Arc<dyn DeleteRecord>,

    // Query use cases (read state)
    list_records: Arc<dyn ListRecords>,
    get_record: Arc<dyn GetRecord>,
    get_record_table: Arc<dyn GetRecordTable>,
    get_dataset_stats: Arc<dyn GetDatasetStats>,
}

impl UseCaseRegistry {
    /// Create a new registry with all use cases configured
    ///
    /// # Arguments
    ///
    /// * `store` - Dataset storage adapter
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        // One lock shared by every mutating use case: each read-modify-write
        // cycle against the backing file runs to completion before the next
        let write_lock = Arc::new(Mutex::new(()));

        // Wire up command use cases
        let create_record = Arc::new(CreateRecordUseCase::new(
            store.clone(),
            write_lock.clone(),
        ));
        let update_record = Arc::new(UpdateRecordUseCase::new(
            store.clone(),
            write_lock.clone(),
        ));
        let delete_record = Arc::new(DeleteRecordUseCase::new(store.clone(), write_lock));

        // Wire up query use cases
        let list_records = Arc::new(ListRecordsUseCase::new(store.clone()));
        let get_record = Arc::new(GetRecordUseCase::new(store.clone()));
        let get_record_table = Arc::new(GetRecordTableUseCase::new(store.clone()));
        let get_dataset_stats = Arc::new(GetDatasetStatsUseCase::new(store));

        Self {
            create_record,
            update_record,
            delete_record,
            list_records,
            get_record,
            get_record_table,
            get_dataset_stats,
        }
    }

    // ===== Command Use Cases =====

    /// Get the CreateRecord use case
    pub fn create_record(&self) -> Arc<dyn CreateRecord> {
        self.create_record.clone()
    }

    /// Get the UpdateRecord use case
    pub fn update_record(&self) -> Arc<dyn UpdateRecord> {
        self.update_record.clone()
    }

    /// Get the DeleteRecord use case
    pub fn delete_record(&self) -> Arc<dyn DeleteRecord> {
        self.delete_record.clone()
    }

    // ===== Query Use Cases =====

    /// Get the ListRecords use case
    pub fn list_records(&self) -> Arc<dyn ListRecords> {
        self.list_records.clone()
    }

    /// Get the GetRecord use case
    pub fn get_record(&self) -> Arc<dyn GetRecord> {
        self.get_record.clone()
    }

    /// Get the GetRecordTable use case
    pub fn get_record_table(&self) -> Arc<dyn GetRecordTable> {
        self.get_record_table.clone()
    }

    /// Get the GetDatasetStats use case
    pub fn get_dataset_stats(&self) -> Arc<dyn GetDatasetStats> {
        self.get_dataset_stats.clone()
    }
}
