// src/dag/transition.rs

//! Status transition rules.
//!
//! A refused transition is a normal answer (`false`), not an error.

use tracing::debug;

use crate::task::Task;
use crate::types::TaskStatus;

/// Whether `task` may move to `new_status`, given the rest of the snapshot.
///
/// | target        | allowed when                                        |
/// |---------------|-----------------------------------------------------|
/// | `InProgress`  | every dependency found in `tasks` is `Done`         |
/// | `Done`        | current status is `InProgress` or `Review`          |
/// | `Review`      | current status is `InProgress` or `Done`            |
/// | `Blocked`     | current status is not `Done`                        |
/// | `Todo`        | current status is not `Done`                        |
///
/// Dependency ids that do not resolve against `tasks` are not consulted.
pub fn can_transition(task: &Task, new_status: TaskStatus, tasks: &[Task]) -> bool {
    let from = task.status;
    match new_status {
        TaskStatus::InProgress => tasks
            .iter()
            .filter(|t| task.depends_on_id(&t.id))
            .all(|dep| dep.status == TaskStatus::Done),
        TaskStatus::Done => matches!(from, TaskStatus::InProgress | TaskStatus::Review),
        TaskStatus::Review => matches!(from, TaskStatus::InProgress | TaskStatus::Done),
        TaskStatus::Blocked | TaskStatus::Todo => from != TaskStatus::Done,
    }
}

/// Like [`can_transition`], but for a target status that has not been parsed
/// yet (a name such as `"REVIEW"` or a code such as `"3"`).
///
/// An unrecognised target is rejected.
pub fn can_transition_to(task: &Task, target: &str, tasks: &[Task]) -> bool {
    match target.parse::<TaskStatus>() {
        Ok(status) => can_transition(task, status, tasks),
        Err(reason) => {
            debug!(task = %task.id, target, %reason, "rejecting transition to unknown status");
            false
        }
    }
}
