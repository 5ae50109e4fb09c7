// src/dag/edit.rs

//! Snapshot-producing edits.
//!
//! None of these touch the input; each returns a new snapshot for the caller
//! to persist (or discard).

use tracing::debug;

use crate::dag::cycle::{EdgeRejection, validate_new_edge};
use crate::task::Task;

/// Make `dependent_id` depend on `dependency_id`, if the cycle guard accepts.
///
/// Re-adding an edge that already exists is accepted and changes nothing.
pub fn add_dependency(
    tasks: &[Task],
    dependency_id: &str,
    dependent_id: &str,
) -> Result<Vec<Task>, EdgeRejection> {
    validate_new_edge(tasks, dependency_id, dependent_id)?;

    let next = tasks
        .iter()
        .map(|task| {
            let mut task = task.clone();
            if task.id == dependent_id && !task.depends_on_id(dependency_id) {
                task.depends_on.push(dependency_id.to_string());
            }
            task
        })
        .collect();

    Ok(next)
}

/// Drop the edge `dependency_id -> dependent_id` if present.
pub fn remove_dependency(tasks: &[Task], dependency_id: &str, dependent_id: &str) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            let mut task = task.clone();
            if task.id == dependent_id {
                task.depends_on.retain(|d| d != dependency_id);
            }
            task
        })
        .collect()
}

/// Remove a task together with every edge that points at it.
pub fn remove_task(tasks: &[Task], id: &str) -> Vec<Task> {
    let next: Vec<Task> = tasks
        .iter()
        .filter(|task| task.id != id)
        .map(|task| {
            let mut task = task.clone();
            task.depends_on.retain(|d| d != id);
            task
        })
        .collect();

    debug!(task = %id, removed = tasks.len() - next.len(), "removed task from snapshot");
    next
}
