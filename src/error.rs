use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// Malformed expression text. Surfaced once when the expression is
    /// registered, never per evaluated sample.
    #[error("parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("degenerate viewport range: x=[{x_min}, {x_max}], y=[{y_min}, {y_max}]")]
    DegenerateViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("invalid screen size: width={width}, height={height}")]
    InvalidScreen { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
