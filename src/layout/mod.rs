// src/layout/mod.rs

//! 2-D layout of a task snapshot.
//!
//! - [`hierarchical`] places tasks in rows by topological level.
//! - [`force`] runs the spring/repulsion simulation.
//! - [`selector`] picks between the two for [`LayoutStrategy::Smart`].
//! - [`rng`] provides the injectable random source the simulation draws from.
//!
//! Positions are derived data: valid for one snapshot and never stored on the
//! task itself.

pub mod force;
pub mod hierarchical;
pub mod rng;
pub mod selector;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::task::Task;
use crate::types::LayoutStrategy;

pub use force::{ForceParams, simulate};
pub use hierarchical::{hierarchical_layout, place_by_levels};
pub use rng::{RandomSource, SplitMix64};
pub use selector::{GraphMetrics, SelectorPolicy, select_strategy};

/// Where a node is drawn.
///
/// `y` is the node's center; `x` is its center shifted left by half of
/// [`Canvas::node_width`], i.e. the left edge of a node box centered on the
/// computed point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

pub type Positions = BTreeMap<String, Position>;

/// Drawing area plus the footprint of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Output `x` is shifted left by half of this so node boxes center on
    /// the computed point. Zero disables the shift.
    pub node_width: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            node_width: 250.0,
        }
    }
}

/// Everything a layout run is parameterised by, usually taken from the
/// config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSettings {
    pub canvas: Canvas,
    pub force: ForceParams,
    pub selector: SelectorPolicy,
}

/// Per-call overrides.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Overrides `ForceParams::iterations`.
    pub iterations: Option<usize>,
    /// Starting points for the force simulation, keyed by task id.
    pub seed_positions: Positions,
}

/// Lay out a snapshot with the requested strategy.
///
/// `rng` is only consulted by the force simulation, and only for tasks that
/// have no seed position.
pub fn layout<R: RandomSource + ?Sized>(
    tasks: &[Task],
    strategy: LayoutStrategy,
    settings: &LayoutSettings,
    options: &LayoutOptions,
    rng: &mut R,
) -> Positions {
    if tasks.is_empty() {
        return Positions::new();
    }

    let resolved = match strategy {
        LayoutStrategy::Smart => {
            let metrics = GraphMetrics::compute(tasks);
            select_strategy(&metrics, &settings.selector)
        }
        other => other,
    };

    info!(requested = %strategy, resolved = %resolved, tasks = tasks.len(), "computing layout");

    match resolved {
        LayoutStrategy::Hierarchical => hierarchical_layout(tasks, &settings.canvas),
        LayoutStrategy::Force | LayoutStrategy::Smart => {
            let mut params = settings.force;
            if let Some(iterations) = options.iterations {
                params.iterations = iterations;
            }
            simulate(tasks, &settings.canvas, &params, &options.seed_positions, rng)
        }
    }
}
