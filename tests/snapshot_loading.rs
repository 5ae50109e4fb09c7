mod common;

use common::temp_file;
use meshwork::errors::MeshworkError;
use meshwork::task::{load_and_validate, load_from_path};
use meshwork::types::TaskStatus;

#[test]
fn test_valid_snapshot_loads() {
    let file = temp_file(
        r#"[
  {"id": "a", "name": "Plan", "status": 2},
  {"id": "b", "name": "Build", "status": "IN_PROGRESS", "depends_on": ["a"], "users": ["ana"]}
]"#,
    );

    let tasks = load_and_validate(file.path()).unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].status, TaskStatus::Done);
    assert_eq!(tasks[1].depends_on, vec!["a".to_string()]);
}

#[test]
fn test_dag_cycle_returns_structured_error() {
    let file = temp_file(
        r#"[
  {"id": "A", "name": "A", "depends_on": ["B"]},
  {"id": "B", "name": "B", "depends_on": ["A"]}
]"#,
    );

    match load_and_validate(file.path()) {
        Err(MeshworkError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("A") || msg.contains("B"));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_dependency_is_validation_error() {
    let file = temp_file(r#"[{"id": "A", "name": "A", "depends_on": ["NonExistent"]}]"#);

    match load_and_validate(file.path()) {
        Err(MeshworkError::Validation(msgs)) => {
            assert_eq!(msgs.len(), 1);
            assert!(msgs[0].contains("unknown dependency"));
            assert!(msgs[0].contains("NonExistent"));
        }
        Err(e) => panic!("Expected Validation error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }

    // The lenient loader accepts it; the core ignores the dangling id.
    assert_eq!(load_from_path(file.path()).unwrap().len(), 1);
}

#[test]
fn test_record_errors_from_all_tasks_are_collected() {
    let file = temp_file(
        r#"[
  {"id": "a", "name": ""},
  {"id": "b", "name": "ok", "status": 12},
  {"name": "no id"}
]"#,
    );

    match load_and_validate(file.path()) {
        Err(MeshworkError::Validation(msgs)) => {
            assert_eq!(
                msgs,
                vec![
                    "task 'a': Task name is required".to_string(),
                    "task 'b': Invalid task status".to_string(),
                    "task #2: Task id is required".to_string(),
                ]
            );
        }
        Err(e) => panic!("Expected Validation error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let file = temp_file(r#"[{"id": "a", "name": "one"}, {"id": "a", "name": "two"}]"#);

    assert!(matches!(
        load_and_validate(file.path()),
        Err(MeshworkError::Validation(_))
    ));
}

#[test]
fn test_non_array_snapshot() {
    let file = temp_file(r#"{"id": "a"}"#);

    assert!(matches!(
        load_and_validate(file.path()),
        Err(MeshworkError::Validation(_))
    ));
    assert!(matches!(
        load_from_path(file.path()),
        Err(MeshworkError::JsonError(_))
    ));
}
