// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks canvas, force and selector values are usable.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    debug!(path = %path.as_ref().display(), "loaded layout config");
    Ok(config)
}

/// Resolve the configuration to use.
///
/// - An explicit path must exist and be valid.
/// - Otherwise `meshwork.toml` in the working directory is used if present.
/// - Otherwise built-in defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_and_validate(path);
    }

    let fallback = default_config_path();
    if fallback.is_file() {
        load_and_validate(&fallback)
    } else {
        debug!("no config file; using built-in layout defaults");
        Ok(ConfigFile::default())
    }
}

/// Default config location: `meshwork.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("meshwork.toml")
}
