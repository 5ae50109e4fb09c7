// src/dag/graph.rs

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::task::Task;

/// Read-only adjacency view over a task snapshot.
///
/// Nodes are addressed by their position in the snapshot (`usize`), which is
/// also the order every traversal starts from, so all derived views are
/// deterministic for a given input order.
///
/// Unknown ids in `depends_on` are dropped when the index is built; repeated
/// entries collapse to a single edge.
#[derive(Debug, Clone)]
pub struct TaskGraph<'a> {
    tasks: &'a [Task],
    index: HashMap<&'a str, usize>,
    /// Direct dependencies: tasks that must be done before this one.
    deps: Vec<Vec<usize>>,
    /// Direct dependents: tasks that list this one in `depends_on`.
    dependents: Vec<Vec<usize>>,
}

impl<'a> TaskGraph<'a> {
    /// Build the index for one snapshot.
    pub fn from_tasks(tasks: &'a [Task]) -> Self {
        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            match index.entry(task.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) => {
                    warn!(task = %task.id, "duplicate task id in snapshot; keeping first occurrence");
                }
            }
        }

        let mut deps: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];

        for (i, task) in tasks.iter().enumerate() {
            for dep_id in &task.depends_on {
                match index.get(dep_id.as_str()) {
                    Some(&d) => {
                        if !deps[i].contains(&d) {
                            deps[i].push(d);
                            dependents[d].push(i);
                        }
                    }
                    None => {
                        debug!(task = %task.id, dep = %dep_id, "ignoring unknown dependency id");
                    }
                }
            }
        }

        Self {
            tasks,
            index,
            deps,
            dependents,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of distinct, resolvable dependency edges.
    pub fn edge_count(&self) -> usize {
        self.deps.iter().map(Vec::len).sum()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&'a Task> {
        self.index_of(id).map(|i| &self.tasks[i])
    }

    pub fn task(&self, idx: usize) -> &'a Task {
        &self.tasks[idx]
    }

    pub fn tasks(&self) -> &'a [Task] {
        self.tasks
    }

    /// Direct dependency handles of node `idx`.
    pub fn dependencies(&self, idx: usize) -> &[usize] {
        &self.deps[idx]
    }

    /// Direct dependent handles of node `idx`.
    pub fn dependents(&self, idx: usize) -> &[usize] {
        &self.dependents[idx]
    }

    /// Immediate dependencies of a task (resolved entries of its `depends_on`).
    pub fn dependencies_of(&self, id: &str) -> Vec<&'a str> {
        self.ids_at(self.index_of(id).map(|i| self.deps[i].as_slice()))
    }

    /// Immediate dependents of a task, in snapshot order.
    pub fn dependents_of(&self, id: &str) -> Vec<&'a str> {
        self.ids_at(self.index_of(id).map(|i| self.dependents[i].as_slice()))
    }

    /// Whether `target` can be reached from `start` by following
    /// `depends_on` edges. A node reaches itself.
    pub fn reaches(&self, start: usize, target: usize) -> bool {
        let mut visited = vec![false; self.len()];
        let mut stack = vec![start];

        while let Some(idx) = stack.pop() {
            if idx == target {
                return true;
            }
            if std::mem::replace(&mut visited[idx], true) {
                continue;
            }
            stack.extend(self.deps[idx].iter().copied().filter(|&d| !visited[d]));
        }

        false
    }

    fn ids_at(&self, handles: Option<&[usize]>) -> Vec<&'a str> {
        handles
            .unwrap_or(&[])
            .iter()
            .map(|&i| self.tasks[i].id.as_str())
            .collect()
    }
}
