mod common;

use common::{SnapshotBuilder, TaskBuilder};
use meshwork::dag::query::{
    FilterCriteria, completion_percentage, dependents_of, filter_tasks, sort_by_dependencies,
    statistics, tasks_by_status,
};
use meshwork::task::Task;
use meshwork::types::TaskStatus;

fn board() -> Vec<Task> {
    SnapshotBuilder::new()
        .with(
            TaskBuilder::new("api")
                .name("Design API")
                .status(TaskStatus::Done)
                .user("ana")
                .tag("backend"),
        )
        .with(
            TaskBuilder::new("ui")
                .name("Build board UI")
                .description("drag and drop")
                .status(TaskStatus::InProgress)
                .user("ben")
                .tag("frontend")
                .after("api"),
        )
        .with(
            TaskBuilder::new("docs")
                .name("Write docs")
                .user("ana")
                .user("ben")
                .after("api")
                .after("ui"),
        )
        .build()
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn test_dependents_in_snapshot_order() {
    let tasks = board();

    assert_eq!(dependents_of("api", &tasks), vec!["ui", "docs"]);
    assert_eq!(dependents_of("ui", &tasks), vec!["docs"]);
    assert!(dependents_of("docs", &tasks).is_empty());
}

#[test]
fn test_filter_combines_criteria() {
    let tasks = board();

    let by_user = FilterCriteria {
        user: Some("ana".to_string()),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_tasks(&tasks, &by_user)), vec!["api", "docs"]);

    let user_and_status = FilterCriteria {
        user: Some("ana".to_string()),
        status: Some(TaskStatus::Todo),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_tasks(&tasks, &user_and_status)), vec!["docs"]);

    let by_tag = FilterCriteria {
        tag: Some("frontend".to_string()),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter_tasks(&tasks, &by_tag)), vec!["ui"]);
}

#[test]
fn test_search_is_case_insensitive_over_name_description_and_tags() {
    let tasks = board();
    let search = |term: &str| {
        let criteria = FilterCriteria {
            search: Some(term.to_string()),
            ..FilterCriteria::default()
        };
        ids(&filter_tasks(&tasks, &criteria))
    };

    assert_eq!(search("BOARD"), vec!["ui"]);
    assert_eq!(search("drop"), vec!["ui"]);
    assert_eq!(search("backend"), vec!["api"]);
    assert!(search("nothing").is_empty());
}

#[test]
fn test_completion_percentage_rounds() {
    let mut tasks = board();
    assert_eq!(completion_percentage(&tasks), 33);

    tasks[1].status = TaskStatus::Done;
    assert_eq!(completion_percentage(&tasks), 67);

    assert_eq!(completion_percentage(&[]), 0);
}

#[test]
fn test_statistics() {
    let stats = statistics(&board());

    assert_eq!(stats.total, 3);
    assert_eq!(stats.by_status["DONE"], 1);
    assert_eq!(stats.by_status["IN_PROGRESS"], 1);
    assert_eq!(stats.by_status["TODO"], 1);
    assert_eq!(stats.by_status["BLOCKED"], 0);
    assert_eq!(stats.completion, 33);
    assert_eq!(stats.users["ana"].total, 2);
    assert_eq!(stats.users["ana"].completed, 1);
    assert_eq!(stats.users["ben"].completed, 0);
    assert_eq!(stats.tags["backend"], 1);
    assert_eq!(tasks_by_status(&board(), TaskStatus::Done).len(), 1);
}

#[test]
fn test_sort_puts_dependencies_first() {
    let tasks = SnapshotBuilder::new()
        .task("D", &["B", "C"])
        .task("C", &["A"])
        .task("B", &["A"])
        .task("A", &[])
        .build();

    let order = ids(&sort_by_dependencies(&tasks));
    let pos = |id: &str| order.iter().position(|x| x == id).unwrap();

    assert_eq!(order.len(), 4);
    for task in &tasks {
        for dep in &task.depends_on {
            assert!(pos(dep) < pos(&task.id), "{dep} should precede {}", task.id);
        }
    }
}

#[test]
fn test_sort_emits_cycle_members_once() {
    let tasks = SnapshotBuilder::new()
        .task("a", &["b"])
        .task("b", &["a"])
        .task("c", &["a"])
        .build();

    let order = ids(&sort_by_dependencies(&tasks));

    assert_eq!(order, vec!["b", "a", "c"]);
}
