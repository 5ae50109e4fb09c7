mod common;

use common::{SnapshotBuilder, TaskBuilder};
use meshwork::dag::TaskGraph;

#[test]
fn test_direct_dependencies_and_dependents() {
    let tasks = SnapshotBuilder::new()
        .task("api", &[])
        .task("db", &[])
        .task("ui", &["api", "db"])
        .task("docs", &["api"])
        .build();
    let graph = TaskGraph::from_tasks(&tasks);

    assert_eq!(graph.dependencies_of("ui"), vec!["api", "db"]);
    assert!(graph.dependencies_of("api").is_empty());
    assert_eq!(graph.dependents_of("api"), vec!["ui", "docs"]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_unknown_and_repeated_entries_are_dropped() {
    let tasks = SnapshotBuilder::new()
        .task("a", &[])
        .task("b", &["a", "ghost", "a"])
        .build();
    let graph = TaskGraph::from_tasks(&tasks);

    assert_eq!(graph.dependencies_of("b"), vec!["a"]);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains("ghost"));
    assert!(graph.dependencies_of("ghost").is_empty());
    assert!(graph.dependents_of("ghost").is_empty());
}

#[test]
fn test_duplicate_id_keeps_first_occurrence() {
    let tasks = SnapshotBuilder::new()
        .with(TaskBuilder::new("a").name("first"))
        .with(TaskBuilder::new("a").name("second"))
        .build();
    let graph = TaskGraph::from_tasks(&tasks);

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.index_of("a"), Some(0));
    assert_eq!(graph.get("a").map(|t| t.name.as_str()), Some("first"));
}

#[test]
fn test_reaches_follows_dependency_edges() {
    let tasks = SnapshotBuilder::new().chain(&["a", "b", "c"]).build();
    let graph = TaskGraph::from_tasks(&tasks);
    let (a, c) = (graph.index_of("a").unwrap(), graph.index_of("c").unwrap());

    assert!(graph.reaches(c, a));
    assert!(!graph.reaches(a, c));
    assert!(graph.reaches(a, a));
}
