use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::core::{
    AnalysisBehavior, Equation, EquationId, ImportantPoint, Point, PointKind, SamplerBehavior,
    ScreenSize, WorldViewport, find_intersections, find_roots, sample_curve,
};
use crate::error::{GraphError, GraphResult};
use crate::eval::Expression;
use crate::interaction::{InteractionMode, InteractionState, PanSession};

use super::{GraphEngineConfig, GraphScene, SampledCurve, ZoomStepBehavior};

/// One registered equation plus its cached parse result.
///
/// `parsed` is `None` when the expression text is malformed; the failure was
/// logged once at registration and the slot contributes nothing to scenes.
#[derive(Debug, Clone)]
struct EquationSlot {
    equation: Equation,
    parsed: Option<Expression>,
}

impl EquationSlot {
    fn new(equation: Equation) -> Self {
        let parsed = match Expression::parse(&equation.expression) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                warn!(
                    id = %equation.id,
                    expression = %equation.expression,
                    error = %error,
                    "ignoring malformed expression"
                );
                None
            }
        };
        Self { equation, parsed }
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `GraphEngine` owns the equation registry, the live world viewport, and
/// pointer interaction state. It does not react to anything: hosts mutate
/// state through the methods below, then call [`GraphEngine::recompute`] to
/// obtain a fresh scene.
pub struct GraphEngine {
    equations: IndexMap<EquationId, EquationSlot>,
    viewport: WorldViewport,
    screen: ScreenSize,
    sampler: SamplerBehavior,
    analysis: AnalysisBehavior,
    zoom_steps: ZoomStepBehavior,
    interaction: InteractionState,
}

impl GraphEngine {
    pub fn new(config: GraphEngineConfig) -> GraphResult<Self> {
        if !config.screen.is_valid() {
            return Err(GraphError::InvalidScreen {
                width: config.screen.width,
                height: config.screen.height,
            });
        }
        let viewport = WorldViewport::new(
            config.viewport.x_min,
            config.viewport.x_max,
            config.viewport.y_min,
            config.viewport.y_max,
        )?;
        let sampler = config.sampler.validate()?;
        let analysis = config.analysis.validate()?;
        let zoom_steps = config.zoom_steps.validate()?;

        debug!(
            width = config.screen.width,
            height = config.screen.height,
            "graph engine init"
        );

        Ok(Self {
            equations: IndexMap::new(),
            viewport,
            screen: config.screen,
            sampler,
            analysis,
            zoom_steps,
            interaction: InteractionState::default(),
        })
    }

    // --- equation registry ---

    /// Registers (or replaces) an equation. The expression text is parsed
    /// once here; malformed text is surfaced as a single warning and the
    /// equation then contributes an empty curve and no important points.
    pub fn add_equation(&mut self, equation: Equation) {
        trace!(id = %equation.id, expression = %equation.expression, "add equation");
        self.equations
            .insert(equation.id.clone(), EquationSlot::new(equation));
    }

    /// Adds a defaulted equation (`x^2`, next palette color, `f{n}(x)`
    /// label) and returns a reference to it.
    pub fn add_next_equation(&mut self, id: impl Into<EquationId>) -> &Equation {
        let equation = Equation::with_defaults(id, self.equations.len());
        let id = equation.id.clone();
        self.add_equation(equation);
        &self.equations[&id].equation
    }

    /// Replaces an equation's expression text, re-parsing it once.
    pub fn set_expression(&mut self, id: &EquationId, expression: &str) -> GraphResult<()> {
        let slot = self.slot_mut(id)?;
        let mut equation = slot.equation.clone();
        equation.expression = expression.to_owned();
        *slot = EquationSlot::new(equation);
        Ok(())
    }

    pub fn set_visible(&mut self, id: &EquationId, visible: bool) -> GraphResult<()> {
        trace!(id = %id, visible, "set equation visibility");
        self.slot_mut(id)?.equation.visible = visible;
        Ok(())
    }

    pub fn remove_equation(&mut self, id: &EquationId) -> GraphResult<Equation> {
        trace!(id = %id, "remove equation");
        self.equations
            .shift_remove(id)
            .map(|slot| slot.equation)
            .ok_or_else(|| GraphError::InvalidData(format!("unknown equation id `{id}`")))
    }

    #[must_use]
    pub fn equation(&self, id: &EquationId) -> Option<&Equation> {
        self.equations.get(id).map(|slot| &slot.equation)
    }

    /// Registered equations in insertion order.
    pub fn equations(&self) -> impl Iterator<Item = &Equation> {
        self.equations.values().map(|slot| &slot.equation)
    }

    /// Whether the equation's expression parsed successfully.
    #[must_use]
    pub fn is_well_formed(&self, id: &EquationId) -> bool {
        self.equations
            .get(id)
            .is_some_and(|slot| slot.parsed.is_some())
    }

    fn slot_mut(&mut self, id: &EquationId) -> GraphResult<&mut EquationSlot> {
        self.equations
            .get_mut(id)
            .ok_or_else(|| GraphError::InvalidData(format!("unknown equation id `{id}`")))
    }

    // --- viewport control ---

    #[must_use]
    pub fn viewport(&self) -> WorldViewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: WorldViewport) -> GraphResult<()> {
        if !viewport.is_valid() {
            return Err(GraphError::DegenerateViewport {
                x_min: viewport.x_min,
                x_max: viewport.x_max,
                y_min: viewport.y_min,
                y_max: viewport.y_max,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn set_screen(&mut self, screen: ScreenSize) -> GraphResult<()> {
        if !screen.is_valid() {
            return Err(GraphError::InvalidScreen {
                width: screen.width,
                height: screen.height,
            });
        }
        debug!(width = screen.width, height = screen.height, "resize screen");
        self.screen = screen;
        Ok(())
    }

    /// One zoom-in button step around the viewport midpoint.
    pub fn zoom_in(&mut self) -> GraphResult<()> {
        self.zoom_by(self.zoom_steps.button_zoom_in_factor)
    }

    /// One zoom-out button step around the viewport midpoint.
    pub fn zoom_out(&mut self) -> GraphResult<()> {
        self.zoom_by(self.zoom_steps.button_zoom_out_factor)
    }

    /// One wheel notch: scroll up (`delta_y < 0`) zooms in, scroll down
    /// zooms out.
    pub fn wheel_zoom(&mut self, delta_y: f64) -> GraphResult<()> {
        if !delta_y.is_finite() {
            return Err(GraphError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }
        let factor = if delta_y > 0.0 {
            self.zoom_steps.wheel_zoom_out_factor
        } else {
            self.zoom_steps.wheel_zoom_in_factor
        };
        self.zoom_by(factor)
    }

    fn zoom_by(&mut self, factor: f64) -> GraphResult<()> {
        trace!(factor, "zoom viewport");
        self.viewport = self.viewport.zoomed_about(factor, self.viewport.center())?;
        Ok(())
    }

    /// Restores the fixed default world range.
    pub fn reset_view(&mut self) {
        debug!("reset viewport to default range");
        self.viewport = WorldViewport::reset();
    }

    pub fn map_world_to_screen(&self, point: Point) -> GraphResult<(f64, f64)> {
        self.viewport.world_to_screen(point, self.screen)
    }

    pub fn map_screen_to_world(&self, sx: f64, sy: f64) -> GraphResult<Point> {
        self.viewport.screen_to_world(sx, sy, self.screen)
    }

    // --- pan session ---

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Starts a pan session, capturing the baseline viewport and pointer
    /// anchor.
    pub fn pointer_down(&mut self, sx: f64, sy: f64) {
        trace!(sx, sy, "pointer down");
        self.interaction.begin_pan(PanSession {
            baseline: self.viewport,
            anchor_x_px: sx,
            anchor_y_px: sy,
        });
    }

    /// Applies the drag delta against the session baseline. Returns `true`
    /// when a pan session was active and the viewport moved.
    pub fn pointer_move(&mut self, sx: f64, sy: f64) -> GraphResult<bool> {
        let Some(session) = self.interaction.pan_session() else {
            return Ok(false);
        };

        let delta_x = sx - session.anchor_x_px;
        let delta_y = sy - session.anchor_y_px;
        self.viewport = session
            .baseline
            .panned_by_screen_delta(delta_x, delta_y, self.screen)?;
        Ok(true)
    }

    /// Ends the pan session, keeping the viewport where the drag left it.
    pub fn pointer_up(&mut self) {
        trace!("pointer up");
        self.interaction.end_pan();
    }

    // --- scene recomputation ---

    /// Recomputes the full renderer-facing scene: sampled curves for every
    /// visible equation, per-equation roots, and pairwise intersections.
    ///
    /// Called by the host after each batch of equation/viewport mutations.
    /// Nothing is cached between calls except parsed expressions.
    pub fn recompute(&self) -> GraphResult<GraphScene> {
        let visible: Vec<&EquationSlot> = self
            .equations
            .values()
            .filter(|slot| slot.equation.visible)
            .collect();
        debug!(equation_count = visible.len(), "recompute scene");

        let curves = self.sample_visible(&visible)?;
        let mut important_points = self.collect_roots(&visible)?;
        important_points.extend(self.collect_intersections(&visible)?);

        important_points.sort_by_key(|point| {
            (
                kind_rank(point.kind),
                OrderedFloat(point.x),
                OrderedFloat(point.y),
            )
        });

        Ok(GraphScene {
            viewport: self.viewport,
            curves,
            important_points,
        })
    }

    #[cfg(not(feature = "parallel-sampling"))]
    fn sample_visible(&self, visible: &[&EquationSlot]) -> GraphResult<Vec<SampledCurve>> {
        visible.iter().map(|slot| self.sample_slot(slot)).collect()
    }

    /// Curve sampling fans out across equations; analysis stays serial
    /// because pair scans share nothing worth the coordination.
    #[cfg(feature = "parallel-sampling")]
    fn sample_visible(&self, visible: &[&EquationSlot]) -> GraphResult<Vec<SampledCurve>> {
        use rayon::prelude::*;
        visible
            .par_iter()
            .map(|slot| self.sample_slot(slot))
            .collect()
    }

    fn sample_slot(&self, slot: &EquationSlot) -> GraphResult<SampledCurve> {
        let commands = match &slot.parsed {
            Some(expression) => {
                sample_curve(expression, self.viewport, self.screen, self.sampler)?.collect()
            }
            None => Vec::new(),
        };

        Ok(SampledCurve {
            id: slot.equation.id.clone(),
            expression: slot.equation.expression.clone(),
            color: slot.equation.color.clone(),
            label: slot.equation.label.clone(),
            commands,
        })
    }

    fn collect_roots(&self, visible: &[&EquationSlot]) -> GraphResult<Vec<ImportantPoint>> {
        let mut points = Vec::new();
        for slot in visible {
            let Some(expression) = &slot.parsed else {
                continue;
            };
            let roots = find_roots(
                expression,
                self.viewport.x_min,
                self.viewport.x_max,
                self.analysis,
            )?;
            for (index, root) in roots.into_iter().enumerate() {
                points.push(ImportantPoint {
                    x: root.x,
                    y: root.y,
                    kind: PointKind::Root,
                    source_expressions: vec![slot.equation.expression.clone()],
                    label: format!("{} root {}", slot.equation.label, index + 1),
                });
            }
        }
        Ok(points)
    }

    /// One scan per unordered pair of visible equations: O(n^2) pairs, each
    /// O(subdivisions). Equation counts are single-digit in practice, but
    /// nothing here assumes that.
    fn collect_intersections(&self, visible: &[&EquationSlot]) -> GraphResult<Vec<ImportantPoint>> {
        let mut points = Vec::new();
        for i in 0..visible.len() {
            for j in (i + 1)..visible.len() {
                let (first, second) = (visible[i], visible[j]);
                let (Some(expression_a), Some(expression_b)) = (&first.parsed, &second.parsed)
                else {
                    continue;
                };

                let crossings = find_intersections(
                    expression_a,
                    expression_b,
                    self.viewport.x_min,
                    self.viewport.x_max,
                    self.analysis,
                )?;
                for crossing in crossings {
                    points.push(ImportantPoint {
                        x: crossing.x,
                        y: crossing.y,
                        kind: PointKind::Intersection,
                        source_expressions: vec![
                            first.equation.expression.clone(),
                            second.equation.expression.clone(),
                        ],
                        label: format!("{} ∩ {}", first.equation.label, second.equation.label),
                    });
                }
            }
        }
        Ok(points)
    }
}

fn kind_rank(kind: PointKind) -> u8 {
    match kind {
        PointKind::Root => 0,
        PointKind::Intersection => 1,
        PointKind::Extremum => 2,
    }
}
