pub mod dataset_stats;
pub mod get_record;
pub mod list_records;
pub mod record_table;

pub use dataset_stats::DatasetStatsResponse;
pub use get_record::{GetRecordQuery, GetRecordResponse};
pub use list_records::ListRecordsResponse;
pub use record_table::RecordTableResponse;
