// src/config/mod.rs

//! Layout configuration for meshwork.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate that the values make a usable layout (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve};
pub use model::{ConfigFile, LayoutSection, RawConfigFile};
