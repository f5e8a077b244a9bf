pub mod record_id;
pub mod record_table;

pub use record_id::RecordId;
pub use record_table::{CourseAverage, GradeCount, RecordTable};
