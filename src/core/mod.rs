pub mod analysis;
pub mod sampler;
pub mod types;
pub mod viewport;

pub use analysis::{AnalysisBehavior, find_intersections, find_roots};
pub use sampler::{CurveSamples, PathCommand, SamplerBehavior, sample_curve};
pub use types::{
    DEFAULT_EQUATION_COLORS, DEFAULT_EQUATION_EXPRESSION, Equation, EquationId, ImportantPoint,
    Point, PointKind, ScreenSize,
};
pub use viewport::{Projection, WorldViewport};
