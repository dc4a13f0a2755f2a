use atlas_mask::{BlendMode, Rgb, DEFAULT_TOLERANCE};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::RecolorError;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "ATLAS_RECOLOR_CONFIG";

/// Recoloring defaults loaded from a YAML file.
///
/// Every field is optional in the file; command-line flags override
/// whatever is set here.
///
/// ```yaml
/// key_color: "#A349A4"
/// tolerance: 0.1
/// blend: preserve-luminance
/// optimize: true
/// paints:
///   team_red: "#D62828"
///   team_blue: "#1D4ED8"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RecolorConfig {
    /// Key color as hex
    #[serde(default = "default_key_color")]
    pub key_color: String,

    /// Matching tolerance (0..=1)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Blend mode name
    #[serde(default = "default_blend")]
    pub blend: String,

    /// Losslessly re-compress written PNGs
    #[serde(default)]
    pub optimize: bool,

    /// Named paint colors usable in place of hex with `--paint`
    #[serde(default)]
    pub paints: HashMap<String, String>,
}

fn default_key_color() -> String {
    "#A349A4".to_string()
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_blend() -> String {
    BlendMode::default().to_string()
}

impl RecolorConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, RecolorError> {
        let content = std::fs::read_to_string(path).map_err(|e| RecolorError::io(path, e))?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| RecolorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!(
            path = %path.display(),
            paints = config.paints.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, RecolorError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The configured key color.
    pub fn key_color(&self) -> Result<Rgb, RecolorError> {
        RecolorError::parse_color(&self.key_color)
    }

    /// The configured blend mode.
    pub fn blend_mode(&self) -> Result<BlendMode, RecolorError> {
        Ok(self.blend.parse::<BlendMode>()?)
    }

    /// Resolve a paint argument: a preset name from `paints`, or hex.
    pub fn resolve_paint(&self, value: &str) -> Result<Rgb, RecolorError> {
        match self.paints.get(value.trim()) {
            Some(hex) => {
                tracing::debug!(preset = value, color = %hex, "Using paint preset");
                RecolorError::parse_color(hex)
            }
            None => RecolorError::parse_color(value),
        }
    }
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            key_color: default_key_color(),
            tolerance: default_tolerance(),
            blend: default_blend(),
            optimize: false,
            paints: HashMap::new(),
        }
    }
}
