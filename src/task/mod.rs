// src/task/mod.rs

//! Task records and the snapshot they travel in.
//!
//! - [`model`] defines the `Task` record exchanged with the persistence layer.
//! - [`validate`] collects field-level problems for a single record.
//! - [`loader`] reads a JSON snapshot from disk.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::Task;
pub use validate::{validate_record, validate_task};
