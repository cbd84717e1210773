use serde::{Deserialize, Serialize};

use crate::core::{AnalysisBehavior, SamplerBehavior, ScreenSize, WorldViewport};
use crate::error::{GraphError, GraphResult};

/// Zoom step factors applied by the engine-level zoom controls.
///
/// Factors below 1 shrink the world spans (zoom in), factors above 1 grow
/// them (zoom out). Wheel steps are one notch each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomStepBehavior {
    pub button_zoom_in_factor: f64,
    pub button_zoom_out_factor: f64,
    pub wheel_zoom_in_factor: f64,
    pub wheel_zoom_out_factor: f64,
}

impl Default for ZoomStepBehavior {
    fn default() -> Self {
        Self {
            button_zoom_in_factor: 0.8,
            button_zoom_out_factor: 1.25,
            wheel_zoom_in_factor: 0.9,
            wheel_zoom_out_factor: 1.1,
        }
    }
}

impl ZoomStepBehavior {
    pub(crate) fn validate(self) -> GraphResult<Self> {
        for (value, name) in [
            (self.button_zoom_in_factor, "button_zoom_in_factor"),
            (self.button_zoom_out_factor, "button_zoom_out_factor"),
            (self.wheel_zoom_in_factor, "wheel_zoom_in_factor"),
            (self.wheel_zoom_out_factor, "wheel_zoom_out_factor"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "zoom step `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load graph setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEngineConfig {
    pub screen: ScreenSize,
    #[serde(default)]
    pub viewport: WorldViewport,
    #[serde(default)]
    pub sampler: SamplerBehavior,
    #[serde(default)]
    pub analysis: AnalysisBehavior,
    #[serde(default)]
    pub zoom_steps: ZoomStepBehavior,
}

impl GraphEngineConfig {
    /// Creates a config with the default world range and tuning.
    #[must_use]
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            viewport: WorldViewport::default(),
            sampler: SamplerBehavior::default(),
            analysis: AnalysisBehavior::default(),
            zoom_steps: ZoomStepBehavior::default(),
        }
    }

    /// Sets the initial world range.
    #[must_use]
    pub fn with_viewport(mut self, viewport: WorldViewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets curve sampling tuning.
    #[must_use]
    pub fn with_sampler_behavior(mut self, behavior: SamplerBehavior) -> Self {
        self.sampler = behavior;
        self
    }

    /// Sets root/intersection scan tuning.
    #[must_use]
    pub fn with_analysis_behavior(mut self, behavior: AnalysisBehavior) -> Self {
        self.analysis = behavior;
        self
    }

    /// Sets engine-level zoom step factors.
    #[must_use]
    pub fn with_zoom_step_behavior(mut self, behavior: ZoomStepBehavior) -> Self {
        self.zoom_steps = behavior;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse config: {e}")))
    }
}
