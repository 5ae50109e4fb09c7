// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{MeshworkError, Result};
use crate::layout::{Canvas, ForceParams, SelectorPolicy};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::MeshworkError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(
            raw.canvas,
            raw.force,
            raw.selector,
            raw.layout,
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_canvas(&cfg.canvas)?;
    validate_force(&cfg.force, &cfg.canvas)?;
    validate_selector(&cfg.selector)?;
    Ok(())
}

fn config_error(msg: String) -> MeshworkError {
    MeshworkError::ConfigError(msg)
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(config_error(format!("{field} must be > 0 (got {value})")))
    }
}

fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(config_error(format!("{field} must be >= 0 (got {value})")))
    }
}

fn validate_canvas(canvas: &Canvas) -> Result<()> {
    ensure_positive("[canvas].width", canvas.width)?;
    ensure_positive("[canvas].height", canvas.height)?;
    ensure_non_negative("[canvas].node_width", canvas.node_width)?;
    Ok(())
}

fn validate_force(force: &ForceParams, canvas: &Canvas) -> Result<()> {
    if force.iterations == 0 {
        return Err(config_error(
            "[force].iterations must be >= 1 (got 0)".to_string(),
        ));
    }

    if !(force.damping > 0.0 && force.damping <= 1.0) {
        return Err(config_error(format!(
            "[force].damping must be in (0, 1] (got {})",
            force.damping
        )));
    }

    ensure_non_negative("[force].repulsion_strength", force.repulsion_strength)?;
    ensure_non_negative("[force].min_distance", force.min_distance)?;
    ensure_non_negative("[force].attraction_strength", force.attraction_strength)?;
    ensure_non_negative("[force].ideal_edge_length", force.ideal_edge_length)?;
    ensure_non_negative("[force].margin", force.margin)?;

    let smaller = canvas.width.min(canvas.height);
    if 2.0 * force.margin > smaller {
        return Err(config_error(format!(
            "[force].margin {} leaves no room on a {}x{} canvas",
            force.margin, canvas.width, canvas.height
        )));
    }

    Ok(())
}

fn validate_selector(selector: &SelectorPolicy) -> Result<()> {
    ensure_non_negative(
        "[selector].out_degree_threshold",
        selector.out_degree_threshold,
    )
}
