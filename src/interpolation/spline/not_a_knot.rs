//! Not-a-knot cubic spline resampling
//!
//! Fits a cubic spline whose boundary slopes come from quadratic fits over
//! the first and last two segments, then evaluates it over a caller-supplied
//! target grid in a single forward sweep.
//!
//! The target grid must be sorted ascending, strictly denser than the source
//! grid, and share the source's exact endpoints, so the interpolant is only
//! ever evaluated inside the fitted domain.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::{eval_segment, knot_slopes, segment_coefs, spacings};

/// Not-a-knot spline configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NotAKnotCfg::new`] then the setters.
///
/// # Defaults
/// - Minimum allowed spacing between adjacent source `x`;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct NotAKnotCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NotAKnotCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NotAKnotCfg<'a>);

fn check_target(x: &[f64], evals: &[f64]) -> Result<(), InterpolationError> {
    let n = x.len();

    // the new grid must be strictly denser than the source grid
    if evals.len() <= n {
        return Err(InterpolationError::TargetTooSparse {
            source_len: n,
            target_len: evals.len(),
        });
    }

    // and span exactly the source domain
    let (x_min, x_max) = (x[0], x[n - 1]);
    if evals[0] != x_min || evals[evals.len() - 1] != x_max {
        return Err(InterpolationError::DomainMismatch {
            got_first: evals[0],
            got_last: evals[evals.len() - 1],
            x_min,
            x_max,
        });
    }

    // the merge sweep walks segments and targets in lockstep
    for j in 1..evals.len() {
        if evals[j] < evals[j - 1] {
            return Err(InterpolationError::UnsortedTarget { idx: j });
        }
    }

    Ok(())
}

/// Resamples `(x, y)` onto the target grid through a not-a-knot cubic spline.
///
/// # Behavior
/// - Solves the tridiagonal slope system, derives per-segment shifted-power
///   coefficients, then merges the sorted target grid against the segments in
///   one O(n + m) pass: each target in `[x[i], x[i+1])` is evaluated on
///   segment i with `h = xq - x[i]`.
/// - Every target point equal to the last source knot (at least the final
///   one, plus any duplicates of it) is set to `y[n-1]` directly, since the
///   sweep's intervals are half-open.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"not-a-knot cubic spline"`
/// - `n_provided`     : number of (x, y) source points
/// - `n_evaluated`    : number of target points
/// - `evaluated`      : interpolated y-values, index-aligned with the target
///
/// # Errors
/// - [`InterpolationError::TooFewPoints`] with fewer than 4 source knots.
/// - [`InterpolationError::LengthMismatch`] if x and y lengths differ.
/// - [`InterpolationError::TargetTooSparse`] if the target grid is not
///   strictly longer than the source grid.
/// - [`InterpolationError::DomainMismatch`] if the target endpoints are not
///   exactly the source endpoints.
/// - [`InterpolationError::UnsortedTarget`] if the target grid is not sorted
///   ascending.
pub fn interpolate(cfg: NotAKnotCfg) -> Result<InterpolationReport, InterpolationError> {
    let x = cfg.common.x();
    let y = cfg.common.y();
    let evals = cfg.common.x_eval();

    cfg.common.validate()?;
    check_target(x, evals)?;

    let n = x.len();
    let m = evals.len();

    // setters rejected degenerate spacings, so every dx is nonzero
    let dx = spacings(x);
    let slopes = knot_slopes(x, y, &dx);
    let coefs = segment_coefs(y, &dx, &slopes);

    let mut report = InterpolationReport::new(Algorithm::SplineNotAKnot, n, m);
    let mut out = vec![0.0; m];

    // single forward pointer into each sorted sequence
    let mut j = 0;
    for i in 0..n - 1 {
        while j < m && evals[j] < x[i + 1] {
            out[j] = eval_segment(&coefs, i, evals[j] - x[i]);
            j += 1;
        }
    }

    // closed right endpoint, not covered by the half-open sweep; every
    // unconsumed target equals x[n-1] (sorted, endpoint-matched grid)
    for v in out[j..].iter_mut() {
        *v = y[n - 1];
    }

    report.evaluated = out;
    Ok(report)
}
