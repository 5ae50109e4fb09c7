// src/dag/mod.rs

//! Dependency graph integrity.
//!
//! - [`graph`] is the indexed, read-only view over a task snapshot.
//! - [`cycle`] guards new edges and computes dependency closures.
//! - [`edit`] produces new snapshots from accepted edits.
//! - [`levels`] assigns topological levels.
//! - [`transition`] decides which status changes are legal.
//! - [`query`] holds filtering and statistics helpers.
//! - [`check`] validates a whole snapshot at once.

pub mod check;
pub mod cycle;
pub mod edit;
pub mod graph;
pub mod levels;
pub mod query;
pub mod transition;

pub use check::check_snapshot;
pub use cycle::{EdgeRejection, closure_of, validate_new_edge, would_create_cycle};
pub use edit::{add_dependency, remove_dependency, remove_task};
pub use graph::TaskGraph;
pub use levels::compute_levels;
pub use query::{FilterCriteria, TaskStatistics, dependents_of, statistics};
pub use transition::{can_transition, can_transition_to};
