//! 1D interpolation trait and the schemes used by yield curves.
//!
//! Every scheme interpolates inside `[x_min, x_max]`; outside that range
//! the polynomial of the nearest segment is continued. Curve-level
//! extrapolation rules are applied by the caller.

use yc_core::{ensure, errors::Result, Real};

pub mod cubic;
pub mod log_cubic;

pub use cubic::CubicNaturalSpline;
pub use log_cubic::LogCubicInterpolation;

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// First derivative at `x`.
    fn derivative(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

/// Validate abscissae: at least `min_points`, same length as `ys`, finite,
/// strictly increasing.
pub(crate) fn check_nodes(xs: &[Real], ys: &[Real], min_points: usize) -> Result<()> {
    ensure!(
        xs.len() >= min_points,
        "need at least {min_points} points for interpolation, got {}",
        xs.len()
    );
    ensure!(
        xs.len() == ys.len(),
        "xs and ys must have the same length ({} vs {})",
        xs.len(),
        ys.len()
    );
    ensure!(
        xs.iter().chain(ys).all(|v| v.is_finite()),
        "interpolation nodes must be finite"
    );
    ensure!(
        xs.windows(2).all(|w| w[0] < w[1]),
        "xs must be strictly increasing"
    );
    Ok(())
}

/// Binary search: find `i` such that `xs[i] <= x < xs[i+1]`, clamped to
/// the first and last segments.
pub(crate) fn locate(xs: &[Real], x: Real) -> usize {
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if xs[mid] <= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from sorted `xs` and corresponding `ys`.
    ///
    /// # Errors
    /// Fewer than 2 points, mismatched lengths, or unsorted `xs`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_nodes(xs, ys, 2)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    fn slope(&self, i: usize) -> Real {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn operator(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        self.ys[i] + (x - self.xs[i]) * self.slope(i)
    }

    fn derivative(&self, x: Real) -> Real {
        self.slope(locate(&self.xs, x))
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Log-linear interpolation.
///
/// Interpolates `log(y)` linearly and exponentiates the result.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolation {
    inner: LinearInterpolation,
}

impl LogLinearInterpolation {
    /// Construct a log-linear interpolation.
    ///
    /// All `ys` values must be strictly positive.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        ensure!(
            ys.iter().all(|&y| y > 0.0),
            "all y values must be positive for log-linear interpolation"
        );
        let log_ys: Vec<Real> = ys.iter().map(|&y| y.ln()).collect();
        Ok(Self {
            inner: LinearInterpolation::new(xs, &log_ys)?,
        })
    }
}

impl Interpolation1D for LogLinearInterpolation {
    fn x_min(&self) -> Real {
        self.inner.x_min()
    }

    fn x_max(&self) -> Real {
        self.inner.x_max()
    }

    fn operator(&self, x: Real) -> Real {
        self.inner.operator(x).exp()
    }

    fn derivative(&self, x: Real) -> Real {
        self.operator(x) * self.inner.derivative(x)
    }
}

// ── Backward flat ─────────────────────────────────────────────────────────────

/// Backward-flat (left-continuous step) interpolation.
///
/// `f(x) = y[i]` for `x` in `(x[i-1], x[i]]`, `f(x) = y[0]` at and below
/// `x[0]`, and `y[n-1]` beyond the last node. Suited to piecewise-constant
/// instantaneous forwards, whose integral is available from
/// [`primitive`](Self::primitive).
#[derive(Debug, Clone)]
pub struct BackwardFlatInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
    // ∫_{x_0}^{x_i} f, one entry per node.
    primitive: Vec<Real>,
}

impl BackwardFlatInterpolation {
    /// Construct a backward-flat interpolation.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_nodes(xs, ys, 2)?;
        let mut primitive = Vec::with_capacity(xs.len());
        primitive.push(0.0);
        for i in 1..xs.len() {
            primitive.push(primitive[i - 1] + ys[i] * (xs[i] - xs[i - 1]));
        }
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            primitive,
        })
    }

    /// `∫_{x_min}^{x} f(s) ds`; the last value is continued beyond `x_max`.
    pub fn primitive(&self, x: Real) -> Real {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0] * (x - self.xs[0]);
        }
        if x >= self.xs[n - 1] {
            return self.primitive[n - 1] + self.ys[n - 1] * (x - self.xs[n - 1]);
        }
        let i = locate(&self.xs, x);
        self.primitive[i] + self.ys[i + 1] * (x - self.xs[i])
    }
}

impl Interpolation1D for BackwardFlatInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn operator(&self, x: Real) -> Real {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }
        // Left-continuous: a node belongs to the segment ending there.
        let i = locate(&self.xs, x);
        if x == self.xs[i] {
            self.ys[i]
        } else {
            self.ys[i + 1]
        }
    }

    fn derivative(&self, _x: Real) -> Real {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_interpolation() {
        let interp = LinearInterpolation::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_abs_diff_eq!(interp.operator(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(1.5), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.derivative(1.5), 3.0, epsilon = 1e-12);
        // the last segment continues beyond x_max
        assert_abs_diff_eq!(interp.operator(3.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_rejects_bad_nodes() {
        assert!(LinearInterpolation::new(&[0.0], &[1.0]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 1.0], &[1.0]).is_err());
        assert!(LinearInterpolation::new(&[1.0, 1.0], &[1.0, 2.0]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 1.0], &[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn log_linear_interpolation() {
        let e = std::f64::consts::E;
        let interp = LogLinearInterpolation::new(&[0.0, 1.0], &[1.0, e]).unwrap();
        assert_abs_diff_eq!(interp.operator(0.5), e.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(interp.derivative(0.5), e.sqrt(), epsilon = 1e-12);
        assert!(LogLinearInterpolation::new(&[0.0, 1.0], &[1.0, 0.0]).is_err());
    }

    #[test]
    fn backward_flat_is_left_continuous() {
        let interp = BackwardFlatInterpolation::new(&[0.0, 1.0, 2.0], &[0.01, 0.02, 0.03]).unwrap();
        assert_abs_diff_eq!(interp.operator(0.5), 0.02, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.operator(1.0), 0.02, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.operator(1.0 + 1e-9), 0.03, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.operator(5.0), 0.03, epsilon = 1e-15);
    }

    #[test]
    fn backward_flat_primitive() {
        let interp = BackwardFlatInterpolation::new(&[0.0, 1.0, 2.0], &[0.01, 0.02, 0.03]).unwrap();
        assert_abs_diff_eq!(interp.primitive(0.0), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.primitive(0.5), 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.primitive(1.5), 0.02 + 0.015, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.primitive(3.0), 0.02 + 0.03 + 0.03, epsilon = 1e-15);
    }
}
