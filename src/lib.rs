//! graph-rs: function graphing engine.
//!
//! This crate evaluates user-supplied single-variable expressions through a
//! self-contained parser, samples them into renderable curve sequences,
//! locates roots and pairwise intersections, and maps between world and
//! pixel coordinates for interactive pan/zoom. Rendering, persistence, and
//! gesture capture stay on the host side.

pub mod api;
pub mod core;
pub mod error;
pub mod eval;
pub mod interaction;
pub mod telemetry;

pub use api::{GraphEngine, GraphEngineConfig};
pub use error::{GraphError, GraphResult};
