// src/task/validate.rs

//! Structural checks for a single task record.
//!
//! Problems are collected, never fail-fast: a caller editing a task wants to
//! see every issue at once.

use serde_json::Value;

use crate::errors::{MeshworkError, Result};
use crate::task::model::Task;
use crate::types::TaskStatus;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Check a typed record.
///
/// Type-level constraints (status enumeration, list fields) already hold for
/// a `Task`; this covers the textual limits.
pub fn validate_task(task: &Task) -> Result<()> {
    let mut errors = Vec::new();
    check_name(&task.name, &mut errors);
    check_description(&task.description, &mut errors);
    into_result(errors)
}

/// Check an untyped JSON record as it arrives from a transport layer, and
/// convert it into a [`Task`] if it passes.
///
/// Missing optional fields take their defaults; a present field with the wrong
/// shape is an error.
pub fn validate_record(value: &Value) -> Result<Task> {
    let Some(obj) = value.as_object() else {
        return Err(MeshworkError::Validation(vec![
            "Task must be a JSON object".to_string(),
        ]));
    };

    let mut errors = Vec::new();

    match obj.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => {}
        _ => errors.push("Task id is required".to_string()),
    }

    let name = obj.get("name").and_then(Value::as_str).unwrap_or("");
    check_name(name, &mut errors);

    match obj.get("description") {
        None | Some(Value::Null) => {}
        Some(Value::String(desc)) => check_description(desc, &mut errors),
        Some(_) => errors.push("Task description must be a string".to_string()),
    }

    if let Some(status) = obj.get("status").filter(|v| !v.is_null()) {
        if !is_valid_status(status) {
            errors.push("Invalid task status".to_string());
        }
    }

    check_string_list(obj.get("users"), "Users must be an array", &mut errors);
    check_string_list(obj.get("tags"), "Tags must be an array", &mut errors);
    check_string_list(
        obj.get("depends_on"),
        "Dependencies must be an array",
        &mut errors,
    );

    into_result(errors)?;

    // Explicit nulls mean "not provided".
    let mut cleaned = obj.clone();
    cleaned.retain(|_, v| !v.is_null());
    let task: Task = serde_json::from_value(Value::Object(cleaned))?;
    Ok(task)
}

fn check_name(name: &str, errors: &mut Vec<String>) {
    if name.trim().is_empty() {
        errors.push("Task name is required".to_string());
    }
    if name.chars().count() > MAX_NAME_CHARS {
        errors.push(format!(
            "Task name must be less than {MAX_NAME_CHARS} characters"
        ));
    }
}

fn check_description(description: &str, errors: &mut Vec<String>) {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(format!(
            "Task description must be less than {MAX_DESCRIPTION_CHARS} characters"
        ));
    }
}

fn is_valid_status(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_i64().and_then(TaskStatus::from_code).is_some(),
        Value::String(s) => s.parse::<TaskStatus>().is_ok(),
        _ => false,
    }
}

fn check_string_list(value: Option<&Value>, message: &str, errors: &mut Vec<String>) {
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Array(items)) if items.iter().all(Value::is_string) => {}
        Some(_) => errors.push(message.to_string()),
    }
}

fn into_result(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(MeshworkError::Validation(errors))
    }
}
