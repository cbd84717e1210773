mod engine;
mod engine_config;
mod scene;

pub use engine::GraphEngine;
pub use engine_config::{GraphEngineConfig, ZoomStepBehavior};
pub use scene::{GraphScene, SampledCurve};
