use serde::{Deserialize, Serialize};

use crate::core::types::{Point, ScreenSize};
use crate::core::viewport::{Projection, WorldViewport};
use crate::error::{GraphError, GraphResult};
use crate::eval::Expression;

/// Tuning controls for curve sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerBehavior {
    /// Number of equal-width steps the visible x range is split into.
    pub subdivisions: u32,
    /// Vertical slack beyond the screen edges before a point is treated as
    /// path-breaking. Rendering-quality heuristic for steep curves, not a
    /// correctness rule.
    pub offscreen_margin_px: f64,
}

impl Default for SamplerBehavior {
    fn default() -> Self {
        Self {
            subdivisions: 400,
            offscreen_margin_px: 50.0,
        }
    }
}

impl SamplerBehavior {
    pub(crate) fn validate(self) -> GraphResult<Self> {
        if self.subdivisions == 0 {
            return Err(GraphError::InvalidData(
                "sampler subdivisions must be > 0".to_owned(),
            ));
        }
        if !self.offscreen_margin_px.is_finite() || self.offscreen_margin_px < 0.0 {
            return Err(GraphError::InvalidData(
                "sampler off-screen margin must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One element of a sampled curve.
///
/// `Break` tells the renderer to end the current path segment and start a
/// new one at the next point (discontinuities, domain gaps, off-screen
/// excursions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    Point(Point),
    Break,
}

/// Samples an expression over the viewport's visible x range.
///
/// Returns a lazy, finite, non-restartable iterator in increasing-x order.
/// Recomputation means calling `sample_curve` again with current
/// parameters; the iterator holds no state worth reusing.
pub fn sample_curve<'a>(
    expression: &'a Expression,
    viewport: WorldViewport,
    screen: ScreenSize,
    behavior: SamplerBehavior,
) -> GraphResult<CurveSamples<'a>> {
    let behavior = behavior.validate()?;
    let projection = Projection::new(viewport, screen)?;

    Ok(CurveSamples {
        expression,
        projection,
        x_min: viewport.x_min,
        step: viewport.x_span() / f64::from(behavior.subdivisions),
        margin_px: behavior.offscreen_margin_px,
        subdivisions: behavior.subdivisions,
        cursor: 0,
        in_segment: false,
    })
}

/// Lazy sample sequence produced by [`sample_curve`].
///
/// The sequence never starts with a `Break` and never yields two adjacent
/// `Break` markers: the path-building flag is idempotent, so consecutive
/// bad samples collapse into one break.
pub struct CurveSamples<'a> {
    expression: &'a Expression,
    projection: Projection,
    x_min: f64,
    step: f64,
    margin_px: f64,
    subdivisions: u32,
    cursor: u32,
    in_segment: bool,
}

impl CurveSamples<'_> {
    fn classify(&self, x: f64) -> Option<Point> {
        let y = self.expression.eval(x);
        if !y.is_finite() {
            return None;
        }

        let point = Point::new(x, y);
        let (_, sy) = self.projection.world_to_screen(point);
        let height = f64::from(self.projection.screen().height);
        if sy < -self.margin_px || sy > height + self.margin_px {
            return None;
        }
        Some(point)
    }
}

impl Iterator for CurveSamples<'_> {
    type Item = PathCommand;

    fn next(&mut self) -> Option<PathCommand> {
        while self.cursor <= self.subdivisions {
            let x = self.x_min + self.step * f64::from(self.cursor);
            self.cursor += 1;

            match self.classify(x) {
                Some(point) => {
                    self.in_segment = true;
                    return Some(PathCommand::Point(point));
                }
                None if self.in_segment => {
                    self.in_segment = false;
                    return Some(PathCommand::Break);
                }
                None => {}
            }
        }
        None
    }
}
