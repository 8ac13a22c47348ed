//! Shared data types for the viewer: configuration and the shader parameter set.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters consumed by the fractal shader each frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShaderUniforms {
    pub offset: [f64; 2],
    pub zoom: f64,
    pub iterations: f64,
}

/// How much simulated motion a single frame represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStep {
    /// One fixed step per rendered frame; motion speed follows the refresh rate.
    #[default]
    PerFrame,
    /// Scale each step by measured frame time relative to 60 Hz.
    Elapsed,
}

/// Raw `KeyboardEvent.key` values for the six navigation keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub pan_right: String,
    pub pan_left: String,
    pub pan_down: String,
    pub pan_up: String,
    /// Matched case-insensitively.
    pub zoom_in: String,
    /// Matched case-insensitively.
    pub zoom_out: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pan_right: "ArrowRight".into(),
            pan_left: "ArrowLeft".into(),
            pan_down: "ArrowDown".into(),
            pan_up: "ArrowUp".into(),
            zoom_in: "w".into(),
            zoom_out: "s".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub move_speed: f64,
    /// Multiplicative zoom per frame; must be > 1.
    pub zoom_speed: f64,
    pub time_step: TimeStep,
    pub key_bindings: KeyBindings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            zoom_speed: 1.025,
            time_step: TimeStep::PerFrame,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: ViewerConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_speed.is_finite() && self.zoom_speed > 1.0) {
            return Err(ConfigError::ZoomSpeed(self.zoom_speed));
        }
        if !(self.move_speed.is_finite() && self.move_speed >= 0.0) {
            return Err(ConfigError::MoveSpeed(self.move_speed));
        }
        Ok(())
    }
}
