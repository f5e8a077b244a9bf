pub mod create_record;
pub mod delete_record;
pub mod get_dataset_stats;
pub mod get_record;
pub mod get_record_table;
pub mod list_records;
pub mod update_record;

pub use create_record::{CreateRecord, CreateRecordUseCase};
pub use delete_record::{DeleteRecord, DeleteRecordUseCase};
pub use get_dataset_stats::{GetDatasetStats, GetDatasetStatsUseCase};
pub use get_record::{GetRecord, GetRecordUseCase};
pub use get_record_table::{GetRecordTable, GetRecordTableUseCase};
pub use list_records::{ListRecords, ListRecordsUseCase};
pub use update_record::{UpdateRecord, UpdateRecordUseCase};
