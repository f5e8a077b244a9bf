pub mod mock_store;
pub mod record_store;

pub use mock_store::MockRecordStore;
pub use record_store::RecordStore;
