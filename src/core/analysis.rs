use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Point;
use crate::error::{GraphError, GraphResult};
use crate::eval::Expression;

/// Tuning controls for root and intersection scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBehavior {
    /// Scan partition count. Denser than rendering resolution because
    /// crossing detection needs finer steps than curve drawing.
    pub subdivisions: u32,
    /// Bisection refinement budget per detected bracket.
    pub bisection_iterations: u32,
    /// Early-exit tolerance on `|f(mid)|` during refinement.
    pub epsilon: f64,
}

impl Default for AnalysisBehavior {
    fn default() -> Self {
        Self {
            subdivisions: 1000,
            bisection_iterations: 10,
            epsilon: 1e-3,
        }
    }
}

impl AnalysisBehavior {
    pub(crate) fn validate(self) -> GraphResult<Self> {
        if self.subdivisions == 0 {
            return Err(GraphError::InvalidData(
                "analysis subdivisions must be > 0".to_owned(),
            ));
        }
        if self.bisection_iterations == 0 {
            return Err(GraphError::InvalidData(
                "bisection iteration budget must be > 0".to_owned(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(GraphError::InvalidData(
                "analysis epsilon must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Locates zero crossings of `expression` over `[x_min, x_max]`.
///
/// Detection is sign-change based, so it inherits these documented
/// limitations rather than fixing them:
/// - even-multiplicity roots (`x^2` at 0) touch zero without a sign change
///   and are not detected;
/// - roots closer together than one scan step collapse into at most one
///   detection per step interval;
/// - refinement is best-effort within the iteration budget: once a bracket
///   is found a candidate is always emitted, even if the epsilon tolerance
///   was never met.
///
/// Output is ordered by increasing x, each point with `y == 0` by
/// construction.
pub fn find_roots(
    expression: &Expression,
    x_min: f64,
    x_max: f64,
    behavior: AnalysisBehavior,
) -> GraphResult<Vec<Point>> {
    let crossings = refine_sign_changes(|x| expression.eval(x), x_min, x_max, behavior)?;
    Ok(crossings
        .into_iter()
        .map(|x| Point::new(x, 0.0))
        .collect())
}

/// Locates crossings between two expressions over `[x_min, x_max]`.
///
/// Runs the same bracketing and bisection as [`find_roots`] on the
/// difference `d(x) = f_a(x) - f_b(x)`. The reported y is `f_a` evaluated
/// at the refined x (equal to `f_b` within tolerance).
pub fn find_intersections(
    expression_a: &Expression,
    expression_b: &Expression,
    x_min: f64,
    x_max: f64,
    behavior: AnalysisBehavior,
) -> GraphResult<Vec<Point>> {
    let crossings = refine_sign_changes(
        |x| expression_a.eval(x) - expression_b.eval(x),
        x_min,
        x_max,
        behavior,
    )?;
    Ok(crossings
        .into_iter()
        .map(|x| Point::new(x, expression_a.eval(x)))
        .collect())
}

/// Shared scan: walk the fixed-step partition, detect sign changes between
/// adjacent samples, refine each bracket by bisection, return refined x
/// values in increasing order.
fn refine_sign_changes(
    f: impl Fn(f64) -> f64,
    x_min: f64,
    x_max: f64,
    behavior: AnalysisBehavior,
) -> GraphResult<SmallVec<[f64; 8]>> {
    let behavior = behavior.validate()?;
    if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
        return Err(GraphError::InvalidData(
            "scan range must be finite and non-empty".to_owned(),
        ));
    }

    let step = (x_max - x_min) / f64::from(behavior.subdivisions);
    let mut crossings = SmallVec::new();
    let mut left_value = f(x_min);

    for i in 0..behavior.subdivisions {
        let a = x_min + step * f64::from(i);
        let b = a + step;
        let right_value = f(b);

        if left_value.is_finite() && right_value.is_finite() && left_value * right_value < 0.0 {
            crossings.push(bisect(&f, a, b, left_value, behavior));
        }

        left_value = right_value;
    }

    Ok(crossings)
}

/// Bisection over a bracket known to contain a crossing.
///
/// The sign test compares against the cached left-endpoint value: the left
/// endpoint only ever moves onto midpoints sharing its sign, so the cache
/// stays correct without re-evaluation.
fn bisect(
    f: &impl Fn(f64) -> f64,
    mut a: f64,
    mut b: f64,
    left_value: f64,
    behavior: AnalysisBehavior,
) -> f64 {
    for _ in 0..behavior.bisection_iterations {
        let mid = (a + b) / 2.0;
        let mid_value = f(mid);
        if mid_value.abs() < behavior.epsilon {
            break;
        }
        if left_value * mid_value < 0.0 {
            b = mid;
        } else {
            a = mid;
        }
    }
    (a + b) / 2.0
}
