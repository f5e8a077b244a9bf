//! Plotly figure builders
//!
//! Each builder returns a complete Plotly figure as JSON; the embedded
//! pages render it client-side with Plotly.newPlot.

use crate::domain::{CourseAverage, GradeCount, RecordTable};
use serde_json::{json, Value};

/// Table chart of the full dataset
///
/// Cell columns are ordered course, grade, marks, name, id - the display
/// order of the records view, not the natural field order.
pub fn table_figure(table: &RecordTable) -> Value {
    json!({
        "data": [{
            "type": "table",
            "header": {
                "values": ["course", "grade", "marks", "name", "id"],
                "fill": { "color": "paleturquoise" },
                "align": "left"
            },
            "cells": {
                "values": [
                    &table.courses,
                    &table.grades,
                    &table.marks,
                    &table.names,
                    &table.ids
                ],
                "fill": { "color": "lavender" },
                "align": "left"
            }
        }],
        "layout": {}
    })
}

/// Two-row stats figure: average marks per course (bar) stacked over the
/// grade distribution (pie)
pub fn stats_figure(course_averages: &[CourseAverage], grade_counts: &[GradeCount]) -> Value {
    let courses: Vec<&str> = course_averages.iter().map(|c| c.course.as_str()).collect();
    let averages: Vec<f64> = course_averages.iter().map(|c| c.average_marks).collect();
    let grades: Vec<&str> = grade_counts.iter().map(|g| g.grade.as_str()).collect();
    let counts: Vec<usize> = grade_counts.iter().map(|g| g.count).collect();

    json!({
        "data": [
            {
                "type": "bar",
                "name": "Average Marks by Course",
                "x": courses,
                "y": averages,
                "xaxis": "x",
                "yaxis": "y"
            },
            {
                "type": "pie",
                "name": "Grade Distribution",
                "labels": grades,
                "values": counts,
                "domain": { "row": 1, "column": 0 }
            }
        ],
        "layout": {
            "grid": { "rows": 2, "columns": 1, "pattern": "independent" },
            "height": 800,
            "width": 700,
            "showlegend": false,
            "annotations": [
                {
                    "text": "Compare average marks across courses",
                    "showarrow": false,
                    "xref": "paper", "yref": "paper",
                    "x": 0.5, "y": 1.05
                },
                {
                    "text": "Grade Distribution",
                    "showarrow": false,
                    "xref": "paper", "yref": "paper",
                    "x": 0.5, "y": 0.45
                }
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Record, RecordId};

    #[test]
    fn test_table_figure_column_order() {
        let records = vec![
            Record::new(RecordId::new(1), "Ada", 91.0, "A", "CS").unwrap(),
            Record::new(RecordId::new(2), "Grace", 78.0, "B", "Math").unwrap(),
        ];
        let figure = table_figure(&RecordTable::from_records(&records));

        let header = &figure["data"][0]["header"]["values"];
        assert_eq!(
            header,
            &json!(["course", "grade", "marks", "name", "id"])
        );

        let cells = &figure["data"][0]["cells"]["values"];
        assert_eq!(cells[0], json!(["CS", "Math"]));
        assert_eq!(cells[4], json!([1, 2]));
    }

    #[test]
    fn test_stats_figure_traces() {
        let averages = vec![CourseAverage {
            course: "CS".to_string(),
            average_marks: 80.0,
        }];
        let counts = vec![
            GradeCount {
                grade: "A".to_string(),
                count: 2,
            },
            GradeCount {
                grade: "F".to_string(),
                count: 1,
            },
        ];

        let figure = stats_figure(&averages, &counts);

        assert_eq!(figure["data"][0]["type"], "bar");
        assert_eq!(figure["data"][0]["x"], json!(["CS"]));
        assert_eq!(figure["data"][0]["y"], json!([80.0]));

        assert_eq!(figure["data"][1]["type"], "pie");
        assert_eq!(figure["data"][1]["labels"], json!(["A", "F"]));
        assert_eq!(figure["data"][1]["values"], json!([2, 1]));

        assert_eq!(figure["layout"]["height"], 800);
        assert_eq!(figure["layout"]["width"], 700);
        assert_eq!(figure["layout"]["showlegend"], false);
    }

    #[test]
    fn test_empty_dataset_yields_empty_traces() {
        let figure = stats_figure(&[], &[]);
        assert_eq!(figure["data"][0]["x"], json!([]));
        assert_eq!(figure["data"][1]["labels"], json!([]));
    }
}
