use thiserror::Error;

/// Errors raised by the simulation core.
///
/// All of them are local and recoverable: the caller passed a coordinate,
/// dimension or speed the core cannot accept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    #[error("cannot create a {width}x{height} grid")]
    InvalidDimensions { width: usize, height: usize },
    #[error("step interval must be positive, got {0} ms")]
    InvalidSpeed(i64),
    #[error("step rate must be positive and finite, got {0} steps/s")]
    InvalidStepRate(f64),
    #[error("pattern has {actual} cells, expected {expected}")]
    PatternMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, LifeError>;
