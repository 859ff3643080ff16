use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("too few points: got {got}, need at least 4")]
    TooFewPoints { got: usize },

    #[error("degenerate spacing between x = {x1} and x = {x2}")]
    DegenerateSpacing { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("target grid has {target_len} points, must exceed the {source_len} source points")]
    TargetTooSparse { source_len: usize, target_len: usize },

    #[error("target endpoints ({got_first}, {got_last}) do not match source domain ({x_min}, {x_max})")]
    DomainMismatch {
        got_first: f64,
        got_last: f64,
        x_min: f64,
        x_max: f64,
    },

    #[error("target grid not sorted ascending at index {idx}")]
    UnsortedTarget { idx: usize },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}
