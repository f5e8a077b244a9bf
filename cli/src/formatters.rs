//! Output formatting utilities

use colored::*;
use serde_json::Value;
use std::io::Write;
use tabwriter::TabWriter;

/// Format a letter grade with an indicative color
pub fn format_grade(grade: &str) -> ColoredString {
    match grade.chars().next() {
        Some('A') => grade.green(),
        Some('B') => grade.cyan(),
        Some('C') | Some('D') => grade.yellow(),
        Some('F') => grade.red(),
        _ => grade.normal(),
    }
}

fn field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("-")
}

fn marks(record: &Value) -> f64 {
    record.get("marks").and_then(Value::as_f64).unwrap_or(0.0)
}

fn id(record: &Value) -> i64 {
    record.get("id").and_then(Value::as_i64).unwrap_or_default()
}

/// Print records as an aligned table
pub fn print_record_table(records: &[Value]) -> Result<(), String> {
    let mut tw = TabWriter::new(std::io::stdout());

    writeln!(tw, "ID\tNAME\tMARKS\tGRADE\tCOURSE").map_err(|e| e.to_string())?;
    for record in records {
        writeln!(
            tw,
            "{}\t{}\t{:.1}\t{}\t{}",
            id(record),
            field(record, "name"),
            marks(record),
            format_grade(field(record, "grade")),
            field(record, "course"),
        )
        .map_err(|e| e.to_string())?;
    }

    tw.flush().map_err(|e| e.to_string())
}

/// Print one record as key/value lines
pub fn print_record_detail(record: &Value) -> Result<(), String> {
    let mut tw = TabWriter::new(std::io::stdout());

    writeln!(tw, "Id:\t{}", id(record)).map_err(|e| e.to_string())?;
    writeln!(tw, "Name:\t{}", field(record, "name")).map_err(|e| e.to_string())?;
    writeln!(tw, "Marks:\t{:.1}", marks(record)).map_err(|e| e.to_string())?;
    writeln!(tw, "Grade:\t{}", format_grade(field(record, "grade"))).map_err(|e| e.to_string())?;
    writeln!(tw, "Course:\t{}", field(record, "course")).map_err(|e| e.to_string())?;

    tw.flush().map_err(|e| e.to_string())
}
