//! Cubic spline interpolation and resampling for discretely sampled data.
//!
//! Fits a not-a-knot cubic spline through strictly increasing samples and
//! evaluates it on a denser grid (stateless path) or point by point against
//! retained coefficients (stateful path).

pub mod interpolation;
