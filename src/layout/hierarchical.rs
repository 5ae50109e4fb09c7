// src/layout/hierarchical.rs

//! Row-per-level placement.
//!
//! Fully deterministic: the same snapshot (in the same order) and canvas
//! always produce the same positions.

use std::collections::BTreeMap;

use tracing::debug;

use crate::dag::levels::compute_levels;
use crate::layout::{Canvas, Position, Positions};
use crate::task::Task;

/// Fraction of the canvas width a level's row is spread across.
const ROW_WIDTH_FRACTION: f64 = 0.9;

/// Level the snapshot, then place it.
pub fn hierarchical_layout(tasks: &[Task], canvas: &Canvas) -> Positions {
    let levels = compute_levels(tasks);
    place_by_levels(tasks, &levels, canvas)
}

/// Place tasks in rows by their level.
///
/// - Row `l` sits at `y = (l + 1) * height / (max_level + 2)`, leaving one
///   level's worth of padding split between top and bottom.
/// - Within a row, tasks keep snapshot order and are spread evenly across 90%
///   of the width, centered; a lone task sits at mid-width.
/// - `x` is shifted left by half the node footprint so the node box is
///   centered on the computed point.
///
/// Tasks missing from `levels` are treated as level 0.
pub fn place_by_levels(
    tasks: &[Task],
    levels: &BTreeMap<String, usize>,
    canvas: &Canvas,
) -> Positions {
    let mut positions = Positions::new();
    if tasks.is_empty() {
        return positions;
    }

    let level_of = |task: &Task| levels.get(&task.id).copied().unwrap_or(0);
    let max_level = tasks.iter().map(level_of).max().unwrap_or(0);
    let level_height = canvas.height / (max_level + 2) as f64;

    let mut rows: Vec<Vec<&Task>> = vec![Vec::new(); max_level + 1];
    for task in tasks {
        rows[level_of(task)].push(task);
    }

    let row_width = canvas.width * ROW_WIDTH_FRACTION;
    let start_x = (canvas.width - row_width) / 2.0;
    let half_node = canvas.node_width / 2.0;

    for (level, row) in rows.iter().enumerate() {
        let y = (level + 1) as f64 * level_height;
        let spacing = if row.len() > 1 {
            row_width / (row.len() - 1) as f64
        } else {
            0.0
        };

        for (i, task) in row.iter().enumerate() {
            let x = if row.len() == 1 {
                canvas.width / 2.0
            } else {
                start_x + i as f64 * spacing
            };
            positions.insert(task.id.clone(), Position { x: x - half_node, y });
        }
    }

    debug!(tasks = tasks.len(), rows = rows.len(), "hierarchical placement done");
    positions
}
