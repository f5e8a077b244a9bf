//! Record entity
//! Core domain entity: one student's row in the gradebook

use crate::domain::{DomainError, RecordId};
use serde::{Deserialize, Serialize};

/// A student record
///
/// Serializes flat (id, name, marks, grade, course) for both the JSON API
/// and the CSV backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    name: String,
    marks: f64,
    grade: String,
    course: String,
}

impl Record {
    /// Create a record, validating its fields
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        marks: f64,
        grade: impl Into<String>,
        course: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        Self::validate_fields(&name, marks)?;

        Ok(Self {
            id,
            name,
            marks,
            grade: grade.into(),
            course: course.into(),
        })
    }

    /// Validate the client-supplied fields of a create/update payload
    pub fn validate_fields(name: &str, marks: f64) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName(
                "name cannot be empty".to_string(),
            ));
        }

        // Rejects NaN as well: NaN never satisfies the range check
        if !(0.0..=100.0).contains(&marks) {
            return Err(DomainError::InvalidMarks(marks));
        }

        Ok(())
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn course(&self) -> &str {
        &self.course
    }
}
