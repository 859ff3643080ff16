//! Fitted not-a-knot spline for repeated single-point queries
//!
//! [`NotAKnotSpline::fit`] solves the slope system once and retains the
//! per-segment coefficients; [`Interpolator::eval`] then answers point
//! queries against that fixed coefficient set. Refitting for new source
//! data means building a new value, never mutating an existing one.

use crate::interpolation::config::{check_source_x, non_finite_idx, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::spline::helpers::{
    eval_segment, find_interval, knot_slopes, segment_coefs, spacings, SegmentCoefs,
};
use crate::interpolation::traits::Interpolator;

/// A not-a-knot cubic spline fitted to one source dataset.
///
/// Immutable after construction; sharing `&NotAKnotSpline` across threads
/// needs no locking.
#[derive(Debug, Clone)]
pub struct NotAKnotSpline {
    x: Vec<f64>,
    coefs: SegmentCoefs,
}

impl NotAKnotSpline {
    /// Fits a spline through `(x, y)`.
    ///
    /// # Errors
    /// - [`InterpolationError::LengthMismatch`] if x and y lengths differ.
    /// - [`InterpolationError::TooFewPoints`] with fewer than 4 knots.
    /// - [`InterpolationError::DegenerateSpacing`] if adjacent knots are
    ///   closer than [`DEFAULT_X_TOL`].
    /// - [`InterpolationError::NonIncreasingX`] if x is not strictly
    ///   increasing.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        check_source_x(x, DEFAULT_X_TOL)?;

        if y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if y.len() != x.len() {
            return Err(InterpolationError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let dx = spacings(x);
        let slopes = knot_slopes(x, y, &dx);
        let coefs = segment_coefs(y, &dx, &slopes);

        Ok(Self { x: x.to_vec(), coefs })
    }

    /// Fitted domain `(x_min, x_max)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}

impl Interpolator for NotAKnotSpline {
    /// Evaluates the spline at `x`.
    ///
    /// Inside the fitted domain this is the segment polynomial containing
    /// `x`. Outside it, the nearest boundary segment's polynomial is
    /// continued as-is: never an error, but a degraded-accuracy mode the
    /// caller opts into, with no bound on how far the continuation drifts.
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let i = find_interval(&self.x, x);
        Ok(eval_segment(&self.coefs, i, x - self.x[i]))
    }
}
