// src/dag/cycle.rs

//! Cycle guard: the single gate every new dependency edge passes through.
//!
//! Edge direction is `dependency -> dependent`. Proposing that `dependent`
//! depends on `dependency` closes a cycle exactly when `dependent` is already
//! among the (transitive) dependencies of `dependency`, or they are the same
//! task.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::dag::graph::TaskGraph;
use crate::task::Task;

/// Why a proposed dependency edge was refused.
///
/// This is an expected outcome of an interactive edit, returned as a value;
/// the caller must simply not apply the edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeRejection {
    #[error("'{dependent}' cannot depend on '{dependency}': this would create a circular dependency")]
    CycleDetected {
        dependency: String,
        dependent: String,
    },

    #[error("unknown task '{0}'")]
    UnknownTask(String),
}

/// Would adding the edge `new_dependency_id -> task_id` (i.e. `task_id` now
/// depends on `new_dependency_id`) make `task_id` reachable from itself?
///
/// Self-dependency is an immediate cycle. Unknown ids cannot close a cycle.
/// Work is bounded to O(V + E) by a visited set.
pub fn would_create_cycle(task_id: &str, new_dependency_id: &str, tasks: &[Task]) -> bool {
    if task_id == new_dependency_id {
        return true;
    }

    let graph = TaskGraph::from_tasks(tasks);
    match (graph.index_of(new_dependency_id), graph.index_of(task_id)) {
        (Some(start), Some(target)) => graph.reaches(start, target),
        _ => false,
    }
}

/// Gate for a proposed edge: `dependent_id` would gain `dependency_id` in its
/// `depends_on`.
pub fn validate_new_edge(
    tasks: &[Task],
    dependency_id: &str,
    dependent_id: &str,
) -> Result<(), EdgeRejection> {
    let graph = TaskGraph::from_tasks(tasks);

    let mut handles = [0usize; 2];
    for (slot, id) in handles.iter_mut().zip([dependency_id, dependent_id]) {
        match graph.index_of(id) {
            Some(idx) => *slot = idx,
            None => {
                debug!(task = %id, "edge rejected: unknown task");
                return Err(EdgeRejection::UnknownTask(id.to_string()));
            }
        }
    }
    let [dependency, dependent] = handles;

    if dependency == dependent || graph.reaches(dependency, dependent) {
        info!(
            dependency = %dependency_id,
            dependent = %dependent_id,
            "edge rejected: would create a cycle"
        );
        return Err(EdgeRejection::CycleDetected {
            dependency: dependency_id.to_string(),
            dependent: dependent_id.to_string(),
        });
    }

    debug!(dependency = %dependency_id, dependent = %dependent_id, "edge accepted");
    Ok(())
}

/// All transitive dependencies of `task_id`.
///
/// A latent cycle in the input terminates the walk rather than looping; in
/// that (defective) case the task's own id may appear in the result. Unknown
/// task → empty set.
pub fn closure_of(task_id: &str, tasks: &[Task]) -> BTreeSet<String> {
    let graph = TaskGraph::from_tasks(tasks);
    let mut closure = BTreeSet::new();

    let Some(root) = graph.index_of(task_id) else {
        return closure;
    };

    let mut visited = vec![false; graph.len()];
    let mut stack: Vec<usize> = graph.dependencies(root).to_vec();

    while let Some(idx) = stack.pop() {
        if std::mem::replace(&mut visited[idx], true) {
            continue;
        }
        closure.insert(graph.task(idx).id.clone());
        stack.extend(graph.dependencies(idx).iter().copied().filter(|&d| !visited[d]));
    }

    closure
}
