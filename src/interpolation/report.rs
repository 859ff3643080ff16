//! Defines the struct returned by the stateless interpolation path.
//!
//! This report summarizes key metadata about the interpolation run,
//! including the algorithm used, number of source and target points,
//! and the interpolated ordinates.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method
/// - `n_provided`     : number of source data points `(x, y)`
/// - `n_evaluated`    : number of target points interpolated at
/// - `evaluated`      : interpolated values, index-aligned with the target grid
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
        }
    }
}
