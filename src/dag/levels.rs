// src/dag/levels.rs

//! Topological leveling (Kahn's algorithm).
//!
//! A task's level is the length of the longest dependency chain ending at it;
//! tasks without dependencies sit at level 0.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, warn};

use crate::dag::graph::TaskGraph;
use crate::task::Task;

/// Level per task id.
pub fn compute_levels(tasks: &[Task]) -> BTreeMap<String, usize> {
    let graph = TaskGraph::from_tasks(tasks);
    level_by_index(&graph)
        .into_iter()
        .enumerate()
        .map(|(idx, level)| (graph.task(idx).id.clone(), level))
        .collect()
}

/// Level per node handle, in snapshot order.
///
/// Nodes the queue never reaches (only possible when a cycle slipped past the
/// cycle guard) are left at level 0 instead of failing.
pub(crate) fn level_by_index(graph: &TaskGraph<'_>) -> Vec<usize> {
    let n = graph.len();
    let mut in_degree: Vec<usize> = (0..n).map(|i| graph.dependencies(i).len()).collect();
    let mut levels = vec![0usize; n];
    let mut reached = vec![false; n];
    let mut queue: VecDeque<usize> = VecDeque::new();

    for (idx, &degree) in in_degree.iter().enumerate() {
        if degree == 0 {
            reached[idx] = true;
            queue.push_back(idx);
        }
    }

    while let Some(current) = queue.pop_front() {
        let next_level = levels[current] + 1;
        for &dependent in graph.dependents(current) {
            levels[dependent] = levels[dependent].max(next_level);
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                reached[dependent] = true;
                queue.push_back(dependent);
            }
        }
    }

    let mut unreached = 0usize;
    for idx in 0..n {
        if !reached[idx] {
            warn!(
                task = %graph.task(idx).id,
                "task unreachable during leveling (dependency cycle?); defaulting to level 0"
            );
            levels[idx] = 0;
            unreached += 1;
        }
    }

    debug!(
        tasks = n,
        max_level = levels.iter().copied().max().unwrap_or(0),
        unreached,
        "computed topological levels"
    );

    levels
}
