use serde::{Deserialize, Serialize};

use crate::core::types::{Point, ScreenSize};
use crate::error::{GraphError, GraphResult};

/// Default world range restored by reset: `[-10, 10] × [-10, 10]`.
pub const DEFAULT_WORLD_MIN: f64 = -10.0;
pub const DEFAULT_WORLD_MAX: f64 = 10.0;

/// Visible world-space rectangle of the graph.
///
/// Invariant: `x_min < x_max` and `y_min < y_max`. Mutating operations
/// (`panned_by_screen_delta`, `zoomed_about`, reset via [`Default`]) return a
/// fresh viewport; nothing updates bounds in place. There is deliberately no
/// clamp on how small or large the spans may become.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldViewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for WorldViewport {
    fn default() -> Self {
        Self {
            x_min: DEFAULT_WORLD_MIN,
            x_max: DEFAULT_WORLD_MAX,
            y_min: DEFAULT_WORLD_MIN,
            y_max: DEFAULT_WORLD_MAX,
        }
    }
}

impl WorldViewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> GraphResult<Self> {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
        .validated()
    }

    /// The fixed default range, regardless of prior state.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.x_min < self.x_max
            && self.y_min < self.y_max
    }

    fn validated(self) -> GraphResult<Self> {
        if !self.is_valid() {
            return Err(GraphError::DegenerateViewport {
                x_min: self.x_min,
                x_max: self.x_max,
                y_min: self.y_min,
                y_max: self.y_max,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Builds a validated projection onto `screen`.
    pub fn projection(self, screen: ScreenSize) -> GraphResult<Projection> {
        Projection::new(self, screen)
    }

    /// Maps a world point to pixel coordinates.
    pub fn world_to_screen(self, point: Point, screen: ScreenSize) -> GraphResult<(f64, f64)> {
        Ok(self.projection(screen)?.world_to_screen(point))
    }

    /// Maps pixel coordinates back to a world point.
    pub fn screen_to_world(self, sx: f64, sy: f64, screen: ScreenSize) -> GraphResult<Point> {
        Ok(self.projection(screen)?.screen_to_world(sx, sy))
    }

    /// Translates the viewport by a pixel-space drag delta.
    ///
    /// `self` is the baseline viewport captured at drag start, not the live
    /// one: re-deriving from the baseline on every pointer event keeps a
    /// continuous drag free of compounding rounding drift. Horizontal drag
    /// is inverted (dragging right moves the visible window left).
    pub fn panned_by_screen_delta(
        self,
        delta_x_px: f64,
        delta_y_px: f64,
        screen: ScreenSize,
    ) -> GraphResult<Self> {
        let baseline = self.validated()?;
        if !screen.is_valid() {
            return Err(GraphError::InvalidScreen {
                width: screen.width,
                height: screen.height,
            });
        }
        if !delta_x_px.is_finite() || !delta_y_px.is_finite() {
            return Err(GraphError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        let world_dx = -(delta_x_px / f64::from(screen.width)) * baseline.x_span();
        let world_dy = (delta_y_px / f64::from(screen.height)) * baseline.y_span();

        Self {
            x_min: baseline.x_min + world_dx,
            x_max: baseline.x_max + world_dx,
            y_min: baseline.y_min + world_dy,
            y_max: baseline.y_max + world_dy,
        }
        .validated()
    }

    /// Scales both axis spans by `factor` around a world-space center.
    ///
    /// `factor < 1` zooms in, `factor > 1` zooms out.
    pub fn zoomed_about(self, factor: f64, center: Point) -> GraphResult<Self> {
        let current = self.validated()?;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GraphError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GraphError::InvalidData(
                "zoom center must be finite".to_owned(),
            ));
        }

        let half_x = current.x_span() * factor / 2.0;
        let half_y = current.y_span() * factor / 2.0;

        Self {
            x_min: center.x - half_x,
            x_max: center.x + half_x,
            y_min: center.y - half_y,
            y_max: center.y + half_y,
        }
        .validated()
    }
}

/// Affine world ↔ pixel mapping, validated once at construction.
///
/// Screen y is inverted relative to world y because pixel space grows
/// downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    viewport: WorldViewport,
    screen: ScreenSize,
}

impl Projection {
    pub fn new(viewport: WorldViewport, screen: ScreenSize) -> GraphResult<Self> {
        let viewport = viewport.validated()?;
        if !screen.is_valid() {
            return Err(GraphError::InvalidScreen {
                width: screen.width,
                height: screen.height,
            });
        }
        Ok(Self { viewport, screen })
    }

    #[must_use]
    pub fn screen(self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn viewport(self) -> WorldViewport {
        self.viewport
    }

    #[must_use]
    pub fn world_to_screen(self, point: Point) -> (f64, f64) {
        let width = f64::from(self.screen.width);
        let height = f64::from(self.screen.height);
        let sx = (point.x - self.viewport.x_min) / self.viewport.x_span() * width;
        let sy = height - (point.y - self.viewport.y_min) / self.viewport.y_span() * height;
        (sx, sy)
    }

    #[must_use]
    pub fn screen_to_world(self, sx: f64, sy: f64) -> Point {
        let width = f64::from(self.screen.width);
        let height = f64::from(self.screen.height);
        let x = self.viewport.x_min + (sx / width) * self.viewport.x_span();
        let y = self.viewport.y_max - (sy / height) * self.viewport.y_span();
        Point::new(x, y)
    }
}
