//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::SplineNotAKnot`]      not-a-knot cubic spline
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    SplineNotAKnot,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::SplineNotAKnot => "not-a-knot cubic spline",
        }
    }
}
