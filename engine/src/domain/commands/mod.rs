pub mod create_record;
pub mod delete_record;
pub mod update_record;

pub use create_record::{CreateRecordCommand, CreateRecordResponse};
pub use delete_record::{DeleteRecordCommand, DeleteRecordResponse};
pub use update_record::{UpdateRecordCommand, UpdateRecordResponse};
