mod common;

use common::{SnapshotBuilder, init_tracing};
use meshwork::dag::{EdgeRejection, add_dependency, remove_dependency, remove_task};

#[test]
fn test_accepted_edge_returns_new_snapshot() {
    init_tracing();
    let tasks = SnapshotBuilder::new().task("a", &[]).task("b", &[]).build();

    let next = add_dependency(&tasks, "a", "b").unwrap();

    assert_eq!(next[1].depends_on, vec!["a".to_string()]);
    // The input snapshot is untouched.
    assert!(tasks[1].depends_on.is_empty());
}

#[test]
fn test_rejected_edge_leaves_nothing_to_apply() {
    let tasks = SnapshotBuilder::new().chain(&["a", "b"]).build();

    let result = add_dependency(&tasks, "b", "a");

    assert!(matches!(result, Err(EdgeRejection::CycleDetected { .. })));
}

#[test]
fn test_existing_edge_is_not_duplicated() {
    let tasks = SnapshotBuilder::new().chain(&["a", "b"]).build();

    let next = add_dependency(&tasks, "a", "b").unwrap();

    assert_eq!(next, tasks);
}

#[test]
fn test_remove_dependency() {
    let tasks = SnapshotBuilder::new()
        .task("a", &[])
        .task("b", &[])
        .task("c", &["a", "b"])
        .build();

    let next = remove_dependency(&tasks, "a", "c");

    assert_eq!(next[2].depends_on, vec!["b".to_string()]);
}

#[test]
fn test_remove_task_strips_incoming_references() {
    let tasks = SnapshotBuilder::new()
        .task("a", &[])
        .task("b", &["a"])
        .task("c", &["a", "b"])
        .build();

    let next = remove_task(&tasks, "a");

    assert_eq!(next.len(), 2);
    assert!(next.iter().all(|t| !t.depends_on_id("a")));
    assert_eq!(next[1].depends_on, vec!["b".to_string()]);
}
