//! Column-oriented view of the dataset
//! Consumed by the visualization pages, which chart whole columns at a time

use crate::domain::entities::Record;
use std::collections::BTreeMap;

/// The full dataset as parallel columns
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub ids: Vec<i64>,
    pub names: Vec<String>,
    pub marks: Vec<f64>,
    pub grades: Vec<String>,
    pub courses: Vec<String>,
}

/// Average marks for one course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseAverage {
    pub course: String,
    pub average_marks: f64,
}

/// Number of records holding one grade
#[derive(Debug, Clone, PartialEq)]
pub struct GradeCount {
    pub grade: String,
    pub count: usize,
}

impl RecordTable {
    pub fn from_records(records: &[Record]) -> Self {
        let mut table = Self::default();
        for record in records {
            table.ids.push(record.id().value());
            table.names.push(record.name().to_string());
            table.marks.push(record.marks());
            table.grades.push(record.grade().to_string());
            table.courses.push(record.course().to_string());
        }
        table
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Average marks grouped by course, in course order
    pub fn avg_marks_by_course(&self) -> Vec<CourseAverage> {
        let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for (course, marks) in self.courses.iter().zip(&self.marks) {
            let entry = sums.entry(course).or_insert((0.0, 0));
            entry.0 += marks;
            entry.1 += 1;
        }
        sums.into_iter()
            .map(|(course, (sum, count))| CourseAverage {
                course: course.to_string(),
                average_marks: sum / count as f64,
            })
            .collect()
    }

    /// Record counts grouped by grade, in grade order
    pub fn grade_distribution(&self) -> Vec<GradeCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for grade in &self.grades {
            *counts.entry(grade).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(grade, count)| GradeCount {
                grade: grade.to_string(),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;

    fn record(id: i64, name: &str, marks: f64, grade: &str, course: &str) -> Record {
        Record::new(RecordId::new(id), name, marks, grade, course).unwrap()
    }

    #[test]
    fn test_from_records_keeps_column_alignment() {
        let records = vec![
            record(1, "Ada", 91.0, "A", "CS"),
            record(2, "Grace", 78.5, "B", "Math"),
        ];

        let table = RecordTable::from_records(&records);
        assert_eq!(table.len(), 2);
        assert_eq!(table.ids, vec![1, 2]);
        assert_eq!(table.names, vec!["Ada", "Grace"]);
        assert_eq!(table.marks, vec![91.0, 78.5]);
        assert_eq!(table.grades, vec!["A", "B"]);
        assert_eq!(table.courses, vec!["CS", "Math"]);
    }

    #[test]
    fn test_empty_table() {
        let table = RecordTable::from_records(&[]);
        assert!(table.is_empty());
        assert!(table.avg_marks_by_course().is_empty());
        assert!(table.grade_distribution().is_empty());
    }

    #[test]
    fn test_avg_marks_by_course() {
        let records = vec![
            record(1, "Ada", 90.0, "A", "CS"),
            record(2, "Grace", 70.0, "B", "CS"),
            record(3, "Edsger", 60.0, "C", "Math"),
        ];

        let averages = RecordTable::from_records(&records).avg_marks_by_course();
        assert_eq!(
            averages,
            vec![
                CourseAverage {
                    course: "CS".to_string(),
                    average_marks: 80.0,
                },
                CourseAverage {
                    course: "Math".to_string(),
                    average_marks: 60.0,
                },
            ]
        );
    }

    #[test]
    fn test_grade_distribution() {
        let records = vec![
            record(1, "Ada", 90.0, "A", "CS"),
            record(2, "Grace", 85.0, "A", "Math"),
            record(3, "Edsger", 55.0, "F", "Math"),
        ];

        let counts = RecordTable::from_records(&records).grade_distribution();
        assert_eq!(
            counts,
            vec![
                GradeCount {
                    grade: "A".to_string(),
                    count: 2,
                },
                GradeCount {
                    grade: "F".to_string(),
                    count: 1,
                },
            ]
        );
    }
}
