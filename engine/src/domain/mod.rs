pub mod commands;
pub mod entities;
pub mod error;
pub mod ports;
pub mod queries;
pub mod use_cases;
pub mod value_objects;

pub use commands::{
    CreateRecordCommand, CreateRecordResponse, DeleteRecordCommand, DeleteRecordResponse,
    UpdateRecordCommand, UpdateRecordResponse,
};
pub use entities::Record;
pub use error::{DomainError, Result};
pub use queries::{
    DatasetStatsResponse, GetRecordQuery, GetRecordResponse, ListRecordsResponse,
    RecordTableResponse,
};
pub use value_objects::{CourseAverage, GradeCount, RecordId, RecordTable};
