use serde::{Deserialize, Serialize};

use crate::core::{EquationId, ImportantPoint, PathCommand, WorldViewport};
use crate::error::{GraphError, GraphResult};

/// Materialized sample run for one equation over one viewport.
///
/// `commands` is empty when the equation failed to parse; the parse failure
/// was already surfaced when the equation was registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    pub id: EquationId,
    pub expression: String,
    pub color: String,
    pub label: String,
    pub commands: Vec<PathCommand>,
}

/// Renderer-facing output of one recompute pass.
///
/// Recomputed wholesale whenever equations or the viewport change; the
/// engine keeps no scene state between passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphScene {
    pub viewport: WorldViewport,
    pub curves: Vec<SampledCurve>,
    pub important_points: Vec<ImportantPoint>,
}

impl GraphScene {
    /// Serializes the scene to pretty JSON for regression tests and
    /// debugging tooling.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize scene: {e}")))
    }

    /// Deserializes a scene from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse scene: {e}")))
    }
}
