use thiserror::Error;

/// Errors raised by grid construction, bounded writes and configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
}
