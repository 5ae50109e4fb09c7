// src/task/loader.rs

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::dag::check::check_snapshot;
use crate::errors::{MeshworkError, Result};
use crate::task::model::Task;
use crate::task::validate::validate_record;

/// Load a snapshot (a JSON array of task records) from a given path.
///
/// This only performs JSON deserialization; it does **not** check record
/// limits or graph integrity. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), tasks = tasks.len(), "loaded task snapshot");
    Ok(tasks)
}

/// Load a snapshot from path and run full validation.
///
/// - Every record is checked with [`validate_record`]; all messages from all
///   records are collected, each prefixed with the offending task id.
/// - The resulting snapshot must pass [`check_snapshot`] (unique ids, known
///   dependencies, no cycles).
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&contents)?;

    let Value::Array(records) = raw else {
        return Err(MeshworkError::Validation(vec![
            "snapshot must be a JSON array of tasks".to_string(),
        ]));
    };

    let mut tasks = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match validate_record(record) {
            Ok(task) => tasks.push(task),
            Err(MeshworkError::Validation(messages)) => {
                let label = record
                    .get("id")
                    .and_then(Value::as_str)
                    .map(|id| format!("task '{id}'"))
                    .unwrap_or_else(|| format!("task #{index}"));
                errors.extend(messages.into_iter().map(|m| format!("{label}: {m}")));
            }
            Err(other) => return Err(other),
        }
    }

    if !errors.is_empty() {
        return Err(MeshworkError::Validation(errors));
    }

    check_snapshot(&tasks)?;
    debug!(path = %path.display(), tasks = tasks.len(), "snapshot validated");
    Ok(tasks)
}
