mod common;

use common::{SnapshotBuilder, TaskBuilder};
use meshwork::dag::{can_transition, can_transition_to};
use meshwork::task::Task;
use meshwork::types::TaskStatus;

fn task(status: TaskStatus) -> Task {
    TaskBuilder::new("t").status(status).build()
}

#[test]
fn test_done_requires_in_progress_or_review() {
    let dep = TaskBuilder::new("dep").status(TaskStatus::Done).build();
    let current = TaskBuilder::new("t")
        .status(TaskStatus::InProgress)
        .after("dep")
        .build();
    let tasks = vec![dep, current.clone()];

    assert!(can_transition(&current, TaskStatus::Done, &tasks));
    assert!(can_transition(&task(TaskStatus::Review), TaskStatus::Done, &[]));
    assert!(!can_transition(&task(TaskStatus::Todo), TaskStatus::Done, &[]));
    assert!(!can_transition(&task(TaskStatus::Blocked), TaskStatus::Done, &[]));
}

#[test]
fn test_start_requires_all_dependencies_done() {
    let tasks = SnapshotBuilder::new()
        .with(TaskBuilder::new("a").status(TaskStatus::Done))
        .with(TaskBuilder::new("b").status(TaskStatus::Review))
        .with(TaskBuilder::new("t").after("a").after("b"))
        .build();
    let t = &tasks[2];

    assert!(!can_transition(t, TaskStatus::InProgress, &tasks));

    let mut finished = tasks.clone();
    finished[1].status = TaskStatus::Done;
    assert!(can_transition(&finished[2], TaskStatus::InProgress, &finished));
}

#[test]
fn test_start_without_dependencies_is_always_allowed() {
    for status in TaskStatus::ALL {
        assert!(can_transition(&task(status), TaskStatus::InProgress, &[]));
    }
}

#[test]
fn test_unresolved_dependencies_are_not_consulted() {
    let t = TaskBuilder::new("t").after("elsewhere").build();
    assert!(can_transition(&t, TaskStatus::InProgress, &[t.clone()]));
}

#[test]
fn test_review_from_in_progress_or_done() {
    assert!(can_transition(&task(TaskStatus::InProgress), TaskStatus::Review, &[]));
    assert!(can_transition(&task(TaskStatus::Done), TaskStatus::Review, &[]));
    assert!(!can_transition(&task(TaskStatus::Todo), TaskStatus::Review, &[]));
    assert!(!can_transition(&task(TaskStatus::Blocked), TaskStatus::Review, &[]));
}

#[test]
fn test_done_tasks_cannot_be_blocked_or_reset() {
    for target in [TaskStatus::Blocked, TaskStatus::Todo] {
        assert!(!can_transition(&task(TaskStatus::Done), target, &[]));
        assert!(can_transition(&task(TaskStatus::InProgress), target, &[]));
        assert!(can_transition(&task(TaskStatus::Review), target, &[]));
    }
}

#[test]
fn test_unparsed_targets() {
    let t = task(TaskStatus::InProgress);

    assert!(can_transition_to(&t, "REVIEW", &[]));
    assert!(can_transition_to(&t, "2", &[]));
    assert!(can_transition_to(&t, "in progress", &[]));
    assert!(!can_transition_to(&t, "ARCHIVED", &[]));
    assert!(!can_transition_to(&t, "7", &[]));
}
