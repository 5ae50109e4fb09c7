// src/config/model.rs

use serde::Deserialize;

use crate::layout::{Canvas, ForceParams, LayoutSettings, SelectorPolicy};
use crate::types::LayoutStrategy;

/// Top-level layout configuration as read from a TOML file.
///
/// ```toml
/// [canvas]
/// width = 1600.0
/// height = 900.0
///
/// [force]
/// iterations = 300
/// damping = 0.85
///
/// [selector]
/// chain_threshold = 3
///
/// [layout]
/// strategy = "force"
/// ```
///
/// All sections and fields are optional and fall back to the defaults the
/// layout engine uses without a config file.
///
/// This is the raw, unvalidated form; convert with `ConfigFile::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub canvas: Canvas,

    #[serde(default)]
    pub force: ForceParams,

    #[serde(default)]
    pub selector: SelectorPolicy,

    #[serde(default)]
    pub layout: LayoutSection,
}

/// `[layout]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutSection {
    /// `"hierarchical"`, `"force"` or `"smart"` (default).
    #[serde(default)]
    pub strategy: LayoutStrategy,
}

/// Validated configuration.
///
/// Obtained via `TryFrom<RawConfigFile>` (see `validate.rs`), or
/// `ConfigFile::default()`, which is always valid.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    canvas: Canvas,
    force: ForceParams,
    selector: SelectorPolicy,
    layout: LayoutSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        canvas: Canvas,
        force: ForceParams,
        selector: SelectorPolicy,
        layout: LayoutSection,
    ) -> Self {
        Self {
            canvas,
            force,
            selector,
            layout,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn force(&self) -> &ForceParams {
        &self.force
    }

    pub fn selector(&self) -> &SelectorPolicy {
        &self.selector
    }

    /// Strategy used when the caller does not ask for one.
    pub fn default_strategy(&self) -> LayoutStrategy {
        self.layout.strategy
    }

    pub fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            canvas: self.canvas,
            force: self.force,
            selector: self.selector,
        }
    }
}
