// src/layout/selector.rs

//! Pick a placement from the shape of the graph.
//!
//! Long, reasonably connected dependency chains read best as rows
//! (hierarchical); sparse or shallow graphs read best spread out by the force
//! simulation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::task::Task;
use crate::types::LayoutStrategy;

/// Thresholds for the smart strategy.
///
/// Hierarchical is chosen when `max_chain_length > chain_threshold` **and**
/// `avg_out_degree > out_degree_threshold`. The defaults (2 and 0.3) are
/// tunable starting points, not derived constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorPolicy {
    pub chain_threshold: usize,
    pub out_degree_threshold: f64,
}

impl Default for SelectorPolicy {
    fn default() -> Self {
        Self {
            chain_threshold: 2,
            out_degree_threshold: 0.3,
        }
    }
}

/// Shape metrics the selector decides on.
///
/// Both counts are taken over the resolved graph: `depends_on` entries naming
/// a task outside the snapshot, and repeats of the same entry, contribute to
/// neither `dependency_count` nor `max_chain_length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub task_count: usize,
    /// Distinct dependency edges between tasks in the snapshot.
    pub dependency_count: usize,
    /// `dependency_count / task_count` (0 for an empty snapshot).
    pub avg_out_degree: f64,
    /// Longest dependency chain, counted in edges.
    pub max_chain_length: usize,
}

impl GraphMetrics {
    pub fn compute(tasks: &[Task]) -> Self {
        let graph = TaskGraph::from_tasks(tasks);
        let dependency_count = graph.edge_count();
        let avg_out_degree = if tasks.is_empty() {
            0.0
        } else {
            dependency_count as f64 / tasks.len() as f64
        };

        // Fresh visited set per root so one root's walk cannot shorten
        // another's.
        let max_chain_length = (0..graph.len())
            .map(|root| {
                let mut visited = vec![false; graph.len()];
                chain_depth(&graph, root, 0, &mut visited)
            })
            .max()
            .unwrap_or(0);

        Self {
            task_count: tasks.len(),
            dependency_count,
            avg_out_degree,
            max_chain_length,
        }
    }
}

fn chain_depth(graph: &TaskGraph<'_>, idx: usize, depth: usize, visited: &mut [bool]) -> usize {
    if std::mem::replace(&mut visited[idx], true) {
        return depth;
    }

    graph
        .dependencies(idx)
        .iter()
        .map(|&dep| chain_depth(graph, dep, depth + 1, visited))
        .max()
        .unwrap_or(depth)
}

/// Resolve to a concrete placement; never returns [`LayoutStrategy::Smart`].
pub fn select_strategy(metrics: &GraphMetrics, policy: &SelectorPolicy) -> LayoutStrategy {
    let strategy = if metrics.max_chain_length > policy.chain_threshold
        && metrics.avg_out_degree > policy.out_degree_threshold
    {
        LayoutStrategy::Hierarchical
    } else {
        LayoutStrategy::Force
    };

    debug!(
        max_chain_length = metrics.max_chain_length,
        avg_out_degree = metrics.avg_out_degree,
        %strategy,
        "smart layout selection"
    );

    strategy
}
