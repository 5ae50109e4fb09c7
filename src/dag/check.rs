// src/dag/check.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{MeshworkError, Result};
use crate::task::Task;

/// Whole-snapshot integrity check.
///
/// This checks:
/// - task ids are unique
/// - every `depends_on` entry refers to a task in the snapshot
/// - no task depends on itself
/// - the dependency graph has no cycles
///
/// The per-edit gate is [`crate::dag::validate_new_edge`]; this is for
/// snapshots that arrive from elsewhere (files, another client).
pub fn check_snapshot(tasks: &[Task]) -> Result<()> {
    ensure_unique_ids(tasks)?;
    check_dependencies(tasks)?;
    check_acyclic(tasks)?;
    Ok(())
}

fn ensure_unique_ids(tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(MeshworkError::Validation(vec![format!(
                "duplicate task id '{}'",
                task.id
            )]));
        }
    }
    Ok(())
}

fn check_dependencies(tasks: &[Task]) -> Result<()> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut errors = Vec::new();

    for task in tasks {
        for dep in &task.depends_on {
            if dep == &task.id {
                errors.push(format!("task '{}' cannot depend on itself", task.id));
            } else if !ids.contains(dep.as_str()) {
                errors.push(format!(
                    "task '{}' has unknown dependency '{}' in `depends_on`",
                    task.id, dep
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(MeshworkError::Validation(errors))
    }
}

fn check_acyclic(tasks: &[Task]) -> Result<()> {
    // Edge direction: dep -> task
    // For B with depends_on = ["A"] we add edge A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in tasks {
        graph.add_node(task.id.as_str());
    }

    for task in tasks {
        for dep in &task.depends_on {
            graph.add_edge(dep.as_str(), task.id.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(MeshworkError::DagCycle(format!(
                "cycle detected in task graph involving task '{}'",
                node
            )))
        }
    }
}
