use serde::{Deserialize, Serialize};

/// Fixed pixel rectangle the world range is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}

/// World-space sample. Value type, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Classification of an annotated point.
///
/// `Extremum` is reserved: it is a valid serializable state the analysis
/// pass never currently produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Root,
    Intersection,
    Extremum,
}

/// Annotated point handed to the renderer alongside sampled curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportantPoint {
    pub x: f64,
    pub y: f64,
    pub kind: PointKind,
    /// Expression text of the equations this point came from.
    pub source_expressions: Vec<String>,
    pub label: String,
}

impl ImportantPoint {
    /// Coordinate text the annotation list displays next to the label.
    #[must_use]
    pub fn coordinate_label(&self) -> String {
        format!("({:.3}, {:.3})", self.x, self.y)
    }
}

/// Opaque equation identifier owned by the host UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquationId(String);

impl EquationId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EquationId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EquationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EquationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display color cycle assigned to newly added equations.
pub const DEFAULT_EQUATION_COLORS: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#06b6d4", "#84cc16", "#f97316",
];

pub const DEFAULT_EQUATION_EXPRESSION: &str = "x^2";

/// Equation record owned by the host UI layer.
///
/// The engine reads `expression` and `visible`; `color` and `label` pass
/// through to the scene untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub id: EquationId,
    pub expression: String,
    pub color: String,
    pub visible: bool,
    pub label: String,
}

impl Equation {
    #[must_use]
    pub fn new(
        id: impl Into<EquationId>,
        expression: impl Into<String>,
        color: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            expression: expression.into(),
            color: color.into(),
            visible: true,
            label: label.into(),
        }
    }

    /// Builds the default equation for insertion slot `index`: expression
    /// `x^2`, the next palette color, label `f{index + 1}(x)`.
    #[must_use]
    pub fn with_defaults(id: impl Into<EquationId>, index: usize) -> Self {
        Self::new(
            id,
            DEFAULT_EQUATION_EXPRESSION,
            DEFAULT_EQUATION_COLORS[index % DEFAULT_EQUATION_COLORS.len()],
            format!("f{}(x)", index + 1),
        )
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
