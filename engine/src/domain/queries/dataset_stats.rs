//! DatasetStats Query
//!
//! Aggregates backing the stats view: average marks per course and record
//! counts per grade.

use crate::domain::{CourseAverage, GradeCount};

/// Response carrying the chart aggregates
#[derive(Debug, Clone)]
pub struct DatasetStatsResponse {
    pub course_averages: Vec<CourseAverage>,
    pub grade_counts: Vec<GradeCount>,
}
