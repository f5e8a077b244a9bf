//! Command handlers talking to the service's REST API

use crate::formatters::{print_record_detail, print_record_table};
use crate::options::RecordOptions;
use serde_json::{json, Value};

/// Turn a ureq failure into a printable message, surfacing the error body
/// the API sends on 4xx/5xx
fn request_error(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(code, response) => {
            let detail = response
                .into_json::<Value>()
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_default();

            if detail.is_empty() {
                format!("server returned {}", code)
            } else {
                format!("server returned {}: {}", code, detail)
            }
        }
        other => other.to_string(),
    }
}

fn require_id(args: &[String]) -> Result<&str, String> {
    args.get(2)
        .map(String::as_str)
        .ok_or_else(|| "missing record id".to_string())
}

pub fn handle_list(base_url: &str) -> Result<(), String> {
    let records: Value = ureq::get(&format!("{}/api/data", base_url))
        .call()
        .map_err(request_error)?
        .into_json()
        .map_err(|e| e.to_string())?;

    let records = records.as_array().cloned().unwrap_or_default();
    print_record_table(&records)
}

pub fn handle_get(base_url: &str, args: &[String]) -> Result<(), String> {
    let id = require_id(args)?;

    let record: Value = ureq::get(&format!("{}/api/data/{}", base_url, id))
        .call()
        .map_err(request_error)?
        .into_json()
        .map_err(|e| e.to_string())?;

    print_record_detail(&record)
}

pub fn handle_create(base_url: &str, args: &[String]) -> Result<(), String> {
    let (name, marks, grade, course) = RecordOptions::parse(&args[2..])?.require_all()?;

    let record: Value = ureq::post(&format!("{}/api/data", base_url))
        .send_json(json!({
            "name": name,
            "marks": marks,
            "grade": grade,
            "course": course,
        }))
        .map_err(request_error)?
        .into_json()
        .map_err(|e| e.to_string())?;

    println!(
        "Created record {}",
        record.get("id").and_then(Value::as_i64).unwrap_or_default()
    );
    Ok(())
}

pub fn handle_update(base_url: &str, args: &[String]) -> Result<(), String> {
    let id = require_id(args)?;
    let (name, marks, grade, course) = RecordOptions::parse(&args[3..])?.require_all()?;

    let record: Value = ureq::put(&format!("{}/api/data/{}", base_url, id))
        .send_json(json!({
            "name": name,
            "marks": marks,
            "grade": grade,
            "course": course,
        }))
        .map_err(request_error)?
        .into_json()
        .map_err(|e| e.to_string())?;

    println!("Updated record {}", id);
    print_record_detail(&record)
}

pub fn handle_delete(base_url: &str, args: &[String]) -> Result<(), String> {
    let id = require_id(args)?;

    let response: Value = ureq::delete(&format!("{}/api/data/{}", base_url, id))
        .call()
        .map_err(request_error)?
        .into_json()
        .map_err(|e| e.to_string())?;

    println!(
        "{}",
        response
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("deleted")
    );
    Ok(())
}

pub fn handle_health(base_url: &str) -> Result<(), String> {
    let body = ureq::get(&format!("{}/api/health", base_url))
        .call()
        .map_err(request_error)?
        .into_string()
        .map_err(|e| e.to_string())?;

    println!("{}", body);
    Ok(())
}
