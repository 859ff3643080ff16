use splinterp::interpolation::errors::InterpolationError;
use splinterp::interpolation::spline::not_a_knot::{interpolate, NotAKnotCfg};

type SplinterpResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-9;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn report_metadata() -> SplinterpResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];
    let x_eval: Vec<f64> = (0..9).map(|i| i as f64 * 0.5).collect();

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "not-a-knot cubic spline");
    assert_eq!(rep.n_provided, 5);
    assert_eq!(rep.n_evaluated, 9);
    assert_eq!(rep.evaluated.len(), 9);
    Ok(())
}

#[test]
fn knots_reproduced() -> SplinterpResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [1.0, -2.0, 0.5, 3.0, -1.0];
    let x_eval: Vec<f64> = (0..9).map(|i| i as f64 * 0.5).collect();

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    for (k, &yk) in y.iter().enumerate() {
        assert!(
            approx_eq(rep.evaluated[2 * k], yk),
            "knot {}: got {}, want {}",
            k, rep.evaluated[2 * k], yk
        );
    }
    Ok(())
}

#[test]
fn linear_function_nonuniform() -> SplinterpResult {
    // y = 2x + 1
    let x = [0.0, 0.5, 1.25, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi + 1.0).collect();
    let x_eval = [0.0, 0.25, 0.5, 1.0, 1.25, 1.75, 2.0, 2.5, 3.0];
    let y_expected: Vec<f64> = x_eval.iter().map(|&t| 2.0 * t + 1.0).collect();

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn quadratic_function_uniform() -> SplinterpResult {
    // y = x^2 - 3x + 2
    let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| xi * xi - 3.0 * xi + 2.0).collect();
    let x_eval: Vec<f64> = (0..17).map(|i| i as f64 * 0.5).collect();
    let y_expected: Vec<f64> = x_eval.iter().map(|&t| t * t - 3.0 * t + 2.0).collect();

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn quadratic_function_nonuniform() -> SplinterpResult {
    // y = x^2 on irregular spacing
    let x = [0.0, 0.5, 1.25, 2.0, 3.0, 4.5];
    let y: Vec<f64> = x.iter().map(|&xi| xi * xi).collect();
    let x_eval = [0.0, 0.25, 0.5, 0.9, 1.25, 1.6, 2.0, 2.5, 3.0, 3.7, 4.5];
    let y_expected: Vec<f64> = x_eval.iter().map(|&t| t * t).collect();

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn duplicate_endpoint_target() -> SplinterpResult {
    // y = x + 1; the grid repeats the closing knot, every copy must get y[n-1]
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|&xi| xi + 1.0).collect();
    let x_eval = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 4.0];

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert!(approx_eq(rep.evaluated[7], 5.0), "got {}", rep.evaluated[7]);
    assert!(approx_eq(rep.evaluated[8], 5.0), "got {}", rep.evaluated[8]);
    Ok(())
}

#[test]
fn sine_upsampling() -> SplinterpResult {
    let n = 40;
    let fs = 20.0;
    let x: Vec<f64> = (0..n).map(|i| i as f64 / fs).collect();
    let y: Vec<f64> = x.iter().map(|&t| (2.0 * std::f64::consts::PI * t).sin()).collect();
    let x_eval: Vec<f64> = (0..2 * n - 1).map(|i| i as f64 / (2.0 * fs)).collect();

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.evaluated.len(), 79);
    for (j, &v) in rep.evaluated.iter().enumerate() {
        let truth = (2.0 * std::f64::consts::PI * x_eval[j]).sin();
        assert!(
            (v - truth).abs() < 0.01,
            "at x = {}: got {}, want {}",
            x_eval[j], v, truth
        );
    }
    Ok(())
}

#[test]
fn idempotent_bitwise() -> SplinterpResult {
    let x = [0.0, 0.3, 1.1, 2.0, 3.7, 5.0];
    let y = [0.2, -1.0, 4.0, 2.5, 2.5, -3.0];
    let x_eval = [0.0, 0.1, 0.3, 0.7, 1.1, 1.6, 2.0, 2.9, 3.7, 4.4, 5.0];

    let cfg = NotAKnotCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let first = interpolate(cfg)?;
    let second = interpolate(cfg)?;

    // deterministic: identical inputs give bit-identical output
    assert_eq!(first.evaluated, second.evaluated);
    Ok(())
}

#[test]
fn length_mismatch() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 2.0, 3.0];

    let err = NotAKnotCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y)
        .unwrap_err();
    assert!(matches!(err, InterpolationError::LengthMismatch { x_len: 5, y_len: 4 }));
}

#[test]
fn too_few_points() {
    let x = [0.0, 1.0, 2.0];

    let err = NotAKnotCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::TooFewPoints { got: 3 }));
}

#[test]
fn target_too_sparse() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];

    // same length as the source: rejected, the grid must be strictly denser
    let cfg = NotAKnotCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_eval(&x).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::TargetTooSparse { source_len: 5, target_len: 5 }
    ));
}

#[test]
fn domain_mismatch() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];
    let x_eval = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.5];

    let cfg = NotAKnotCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_eval(&x_eval).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::DomainMismatch { got_last, x_max, .. }
            if got_last == 4.5 && x_max == 4.0
    ));
}

#[test]
fn degenerate_spacing() {
    let x = [0.0, 1.0, 1.0, 2.0, 3.0];

    let err = NotAKnotCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::DegenerateSpacing { x1, x2 } if x1 == 1.0 && x2 == 1.0
    ));
}

#[test]
fn non_increasing_x() {
    let x = [0.0, 1.0, 0.5, 2.0, 3.0];

    let err = NotAKnotCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonIncreasingX));
}

#[test]
fn unsorted_target() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];
    let x_eval = [0.0, 0.5, 0.25, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0];

    let cfg = NotAKnotCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_eval(&x_eval).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::UnsortedTarget { idx: 2 }));
}
