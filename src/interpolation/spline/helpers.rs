/// Stores spacings between adjacent knots
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut dx = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        dx.push(x[i + 1] - x[i]);
    }

    dx
}

/// Solves the cubic-spline tridiagonal system for the first derivative
/// at every knot.
///
/// Interior row i is the C2 continuity condition coupling the slopes at
/// knots i-1, i, i+1:
///
/// ```text
/// alfa[i] m[i-1] + beta[i] m[i] + gama[i] m[i+1] = b[i]
/// alfa[i] = dx[i],  beta[i] = 2(dx[i] + dx[i-1]),  gama[i] = dx[i-1]
/// b[i]    = 3(dx[i] (y[i]-y[i-1])/dx[i-1] + dx[i-1] (y[i+1]-y[i])/dx[i])
/// ```
///
/// The two boundary rows come from quadratic fits over the first and last
/// two segments; the right row is the exact mirror of the left, so linear
/// and quadratic data solve every row exactly on any grid. Solved by
/// forward elimination and back substitution in place over the four
/// length-n buffers; no dense matrix, O(n) time and space. No pivoting:
/// the system is well conditioned for strictly increasing, non-degenerate
/// knots.
pub(crate) fn knot_slopes(x: &[f64], y: &[f64], dx: &[f64]) -> Vec<f64> {
    let n = x.len();

    let mut alfa = vec![0.0; n];
    let mut beta = vec![0.0; n];
    let mut gama = vec![0.0; n];
    let mut b = vec![0.0; n];

    for i in 1..n - 1 {
        alfa[i] = dx[i];
        beta[i] = 2.0 * (dx[i] + dx[i - 1]);
        gama[i] = dx[i - 1];
        b[i] = 3.0
            * (dx[i] * ((y[i] - y[i - 1]) / dx[i - 1])
                + dx[i - 1] * ((y[i + 1] - y[i]) / dx[i]));
    }

    // left boundary, quadratic through the first three knots
    let span0 = x[2] - x[0];
    beta[0] = dx[1];
    gama[0] = span0;
    b[0] = ((dx[0] + 2.0 * span0) * dx[1] * ((y[1] - y[0]) / dx[0])
        + dx[0] * dx[0] * ((y[2] - y[1]) / dx[1]))
        / span0;

    // right boundary, mirror image over the last three knots
    let span1 = x[n - 1] - x[n - 3];
    alfa[n - 1] = span1;
    beta[n - 1] = dx[n - 3];
    b[n - 1] = (dx[n - 2] * dx[n - 2] * ((y[n - 2] - y[n - 3]) / dx[n - 3])
        + (2.0 * span1 + dx[n - 2]) * dx[n - 3] * ((y[n - 1] - y[n - 2]) / dx[n - 2]))
        / span1;

    // forward sweep: normalize row i by its diagonal, then eliminate
    // the sub-diagonal entry of row i+1
    for i in 0..n - 1 {
        let p = beta[i];
        b[i] /= p;
        gama[i] /= p;

        let q = alfa[i + 1];
        b[i + 1] -= q * b[i];
        beta[i + 1] -= q * gama[i];
    }
    b[n - 1] /= beta[n - 1];

    // backward sweep: eliminate the super-diagonal entry of row i
    // using the already-solved row i+1
    for i in (0..n - 1).rev() {
        b[i] -= gama[i] * b[i + 1];
    }

    b
}

/// Per-segment polynomial coefficients in shifted-power form.
///
/// Segment i covers `[x[i], x[i+1])` and evaluates as
/// `a + h (b + h (c + h d))` with `h = x - x[i]`: `a` is the left knot
/// value, `b` the slope there, `c` and `d` the quadratic and cubic
/// power-basis coefficients.
#[derive(Debug, Clone)]
pub(crate) struct SegmentCoefs {
    pub(crate) a: Vec<f64>,
    pub(crate) b: Vec<f64>,
    pub(crate) c: Vec<f64>,
    pub(crate) d: Vec<f64>,
}

/// Hermite-to-power-basis conversion: each segment's cubic is rebuilt
/// from its endpoint values and the solved endpoint slopes, so the
/// interpolant matches both ordinates and both slopes on every segment
/// and is C1 at every interior knot.
pub(crate) fn segment_coefs(y: &[f64], dx: &[f64], m: &[f64]) -> SegmentCoefs {
    let nseg = dx.len();

    let mut coefs = SegmentCoefs {
        a: vec![0.0; nseg],
        b: vec![0.0; nseg],
        c: vec![0.0; nseg],
        d: vec![0.0; nseg],
    };

    for i in 0..nseg {
        let delta = (y[i + 1] - y[i]) / dx[i];

        coefs.a[i] = y[i];
        coefs.b[i] = m[i];
        coefs.c[i] = (3.0 * delta - 2.0 * m[i] - m[i + 1]) / dx[i];
        coefs.d[i] = (m[i] + m[i + 1] - 2.0 * delta) / (dx[i] * dx[i]);
    }

    coefs
}

#[inline]
pub(crate) fn eval_segment(coefs: &SegmentCoefs, i: usize, h: f64) -> f64 {
    coefs.a[i] + h * (coefs.b[i] + h * (coefs.c[i] + h * coefs.d[i]))
}

pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
