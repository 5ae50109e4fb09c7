mod common;

use clap::Parser;
use common::temp_file;
use meshwork::cli::CliArgs;
use meshwork::errors::MeshworkError;
use meshwork::execute;
use meshwork::layout::Positions;
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"[
  {"id": "a", "name": "Plan", "status": 2},
  {"id": "b", "name": "Build", "depends_on": ["a"]},
  {"id": "c", "name": "Ship", "depends_on": ["b"]}
]"#;

/// Run the CLI against `tasks` with an empty config file, so a stray
/// `meshwork.toml` in the working directory cannot leak in.
fn run_cli(tasks: &NamedTempFile, command: &[&str]) -> anyhow::Result<String> {
    let config = temp_file("");
    let mut argv = vec![
        "meshwork".to_string(),
        "--tasks".to_string(),
        tasks.path().display().to_string(),
        "--config".to_string(),
        config.path().display().to_string(),
    ];
    argv.extend(command.iter().map(|s| s.to_string()));

    let args = CliArgs::try_parse_from(argv)?;
    execute(&args)
}

#[test]
fn test_check_prints_ok() {
    let tasks = temp_file(SNAPSHOT);

    assert_eq!(run_cli(&tasks, &["check"]).unwrap(), "ok");
}

#[test]
fn test_check_reports_cycle() {
    let tasks = temp_file(
        r#"[
  {"id": "a", "name": "A", "depends_on": ["b"]},
  {"id": "b", "name": "B", "depends_on": ["a"]}
]"#,
    );

    let err = run_cli(&tasks, &["check"]).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MeshworkError>(),
        Some(MeshworkError::DagCycle(_))
    ));
}

#[test]
fn test_closure_of_unknown_task_is_not_found() {
    let tasks = temp_file(SNAPSHOT);

    let err = run_cli(&tasks, &["closure", "zzz"]).unwrap_err();

    match err.downcast_ref::<MeshworkError>() {
        Some(MeshworkError::TaskNotFound(id)) => assert_eq!(id, "zzz"),
        other => panic!("Expected TaskNotFound, got: {:?}", other),
    }
}

#[test]
fn test_closure_lists_transitive_dependencies() {
    let tasks = temp_file(SNAPSHOT);

    let out = run_cli(&tasks, &["closure", "c"]).unwrap();
    let closure: Vec<String> = serde_json::from_str(&out).unwrap();

    assert_eq!(closure, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_edge_verdicts() {
    let tasks = temp_file(SNAPSHOT);

    let accepted = run_cli(&tasks, &["edge", "--dependency", "a", "--dependent", "c"]).unwrap();
    let accepted: serde_json::Value = serde_json::from_str(&accepted).unwrap();
    assert_eq!(accepted, serde_json::json!({ "accepted": true }));

    let rejected = run_cli(&tasks, &["edge", "--dependency", "c", "--dependent", "a"]).unwrap();
    let rejected: serde_json::Value = serde_json::from_str(&rejected).unwrap();
    assert_eq!(rejected["accepted"], false);
    assert!(
        rejected["reason"]
            .as_str()
            .is_some_and(|r| r.contains("circular dependency"))
    );
}

#[test]
fn test_transition_respects_dependencies() {
    let tasks = temp_file(SNAPSHOT);

    assert_eq!(run_cli(&tasks, &["transition", "b", "IN_PROGRESS"]).unwrap(), "true");
    assert_eq!(run_cli(&tasks, &["transition", "c", "in progress"]).unwrap(), "false");
    assert_eq!(run_cli(&tasks, &["transition", "b", "ARCHIVED"]).unwrap(), "false");
}

#[test]
fn test_layout_with_zero_iterations_stays_in_bounds() {
    let tasks = temp_file(SNAPSHOT);

    let out = run_cli(
        &tasks,
        &["layout", "--strategy", "force", "--seed", "9", "--iterations", "0"],
    )
    .unwrap();
    let positions: Positions = serde_json::from_str(&out).unwrap();

    assert_eq!(positions.len(), 3);
    for pos in positions.values() {
        let center_x = pos.x + 125.0;
        assert!((100.0..=1100.0).contains(&center_x));
        assert!((100.0..=700.0).contains(&pos.y));
    }
}
