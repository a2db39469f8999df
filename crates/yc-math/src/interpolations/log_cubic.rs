//! Log-transformed natural cubic spline.
//!
//! Interpolates `log(y)` with a natural cubic spline, then exponentiates.
//! This is the standard approach for discount-factor curves where `y > 0`.

use yc_core::{ensure, errors::Result, Real};

use super::{CubicNaturalSpline, Interpolation1D};

/// Natural cubic spline in log-space. All `y` values must be strictly
/// positive.
#[derive(Debug, Clone)]
pub struct LogCubicInterpolation {
    inner: CubicNaturalSpline,
}

impl LogCubicInterpolation {
    /// Build a log-cubic interpolation.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        ensure!(
            ys.iter().all(|&y| y > 0.0),
            "all y values must be positive for log-cubic interpolation"
        );
        let log_ys: Vec<Real> = ys.iter().map(|&y| y.ln()).collect();
        Ok(Self {
            inner: CubicNaturalSpline::new(xs, &log_ys)?,
        })
    }
}

impl Interpolation1D for LogCubicInterpolation {
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
