use ndarray::ShapeError;
use thiserror_no_std::Error;

/// Error manager.
#[derive(Error, Debug)]
pub enum TvError {
    /// Dimension conversion error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Input with too few axes to be read as `(..., C, H, W)`.
    #[error("expected at least {expected} axes (..., C, H, W), got {got}")]
    Rank { expected: usize, got: usize },

    /// Spatial axis of length 0.
    #[error("{axis} axis must have length at least 1")]
    EmptyAxis { axis: &'static str },

    /// Selector name that is not supported.
    #[error("unknown {kind} `{value}`")]
    UnknownSelector { kind: &'static str, value: String },

    /// Mean of a score with no element.
    #[error("cannot take the mean of an empty score")]
    EmptyReduction,
}
