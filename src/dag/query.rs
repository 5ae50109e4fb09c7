// src/dag/query.rs

//! Filtering, aggregation and lookup helpers over a snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dag::graph::TaskGraph;
use crate::task::Task;
use crate::types::TaskStatus;

/// Ids of tasks that list `id` in their `depends_on`, in snapshot order.
pub fn dependents_of(id: &str, tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .filter(|t| t.depends_on_id(id))
        .map(|t| t.id.clone())
        .collect()
}

/// Criteria for [`filter_tasks`]. Every field that is set must match.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub status: Option<TaskStatus>,
    pub user: Option<String>,
    pub tag: Option<String>,
    /// Case-insensitive substring of name, description or any tag.
    pub search: Option<String>,
}

impl FilterCriteria {
    fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|s| s != task.status) {
            return false;
        }
        if self.user.as_deref().is_some_and(|u| !task.has_user(u)) {
            return false;
        }
        if self.tag.as_deref().is_some_and(|t| !task.has_tag(t)) {
            return false;
        }
        if let Some(term) = self.search.as_deref() {
            let term = term.to_lowercase();
            let hit = task.name.to_lowercase().contains(&term)
                || task.description.to_lowercase().contains(&term)
                || task.tags.iter().any(|t| t.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }
}

pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|t| criteria.matches(t)).collect()
}

pub fn tasks_by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status == status).collect()
}

/// Share of `Done` tasks, rounded to a whole percent. Empty snapshot → 0.
pub fn completion_percentage(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
    (100.0 * done as f64 / tasks.len() as f64).round() as u8
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserLoad {
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    pub total: usize,
    /// Keyed by status name; every status is present.
    pub by_status: BTreeMap<String, usize>,
    pub completion: u8,
    pub users: BTreeMap<String, UserLoad>,
    pub tags: BTreeMap<String, usize>,
}

pub fn statistics(tasks: &[Task]) -> TaskStatistics {
    let mut by_status: BTreeMap<String, usize> = TaskStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    let mut users: BTreeMap<String, UserLoad> = BTreeMap::new();
    let mut tags: BTreeMap<String, usize> = BTreeMap::new();

    for task in tasks {
        *by_status.entry(task.status.as_str().to_string()).or_default() += 1;

        for user in &task.users {
            let load = users.entry(user.clone()).or_default();
            load.total += 1;
            if task.status == TaskStatus::Done {
                load.completed += 1;
            }
        }

        for tag in &task.tags {
            *tags.entry(tag.clone()).or_default() += 1;
        }
    }

    TaskStatistics {
        total: tasks.len(),
        by_status,
        completion: completion_percentage(tasks),
        users,
        tags,
    }
}

/// Dependency-first ordering: each task appears after all of its known
/// dependencies. Back-edges of a latent cycle are skipped, so every task is
/// still emitted exactly once.
pub fn sort_by_dependencies(tasks: &[Task]) -> Vec<&Task> {
    let graph = TaskGraph::from_tasks(tasks);
    let n = graph.len();
    let mut visiting = vec![false; n];
    let mut visited = vec![false; n];
    let mut sorted = Vec::with_capacity(n);

    for root in 0..n {
        visit(&graph, root, &mut visiting, &mut visited, &mut sorted);
    }

    sorted
}

fn visit<'a>(
    graph: &TaskGraph<'a>,
    idx: usize,
    visiting: &mut [bool],
    visited: &mut [bool],
    sorted: &mut Vec<&'a Task>,
) {
    if visited[idx] || visiting[idx] {
        return;
    }

    visiting[idx] = true;
    for &dep in graph.dependencies(idx) {
        visit(graph, dep, visiting, visited, sorted);
    }
    visiting[idx] = false;
    visited[idx] = true;
    sorted.push(graph.task(idx));
}
