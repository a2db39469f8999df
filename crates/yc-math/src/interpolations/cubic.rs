//! Natural cubic spline.
//!
//! Node slopes `tᵢ = f'(xᵢ)` are solved from the C² continuity conditions
//! with zero second derivative at both ends; the spline is then evaluated as
//! a cubic Hermite polynomial on each interval. Every slope depends on every
//! node, so moving one `yᵢ` changes the whole curve.

use yc_core::{errors::Result, Real};

use super::{check_nodes, locate, Interpolation1D};

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Convert slopes (`ts`) + data (`xs`, `ys`) into polynomial coefficients.
///
/// For each interval `[x_i, x_{i+1}]`:
///
///   `f(x) = y_i + dx*(a_i + dx*(b_i + dx*c_i))`
///
/// where `dx = x - x_i`.
fn compute_coefficients(xs: &[Real], ys: &[Real], ts: &[Real]) -> (Vec<Real>, Vec<Real>, Vec<Real>) {
    let n = xs.len();
    let mut a = Vec::with_capacity(n - 1);
    let mut b = Vec::with_capacity(n - 1);
    let mut c = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        let dx = xs[i + 1] - xs[i];
        let s = (ys[i + 1] - ys[i]) / dx;
        a.push(ts[i]);
        b.push((3.0 * s - ts[i + 1] - 2.0 * ts[i]) / dx);
        c.push((ts[i + 1] + ts[i] - 2.0 * s) / (dx * dx));
    }

    (a, b, c)
}

/// Solve a tridiagonal system in place (Thomas algorithm).
///
/// `lower[0]` and `upper[n-1]` are ignored. The natural-spline matrix is
/// strictly diagonally dominant, so no pivoting is needed.
fn solve_tridiagonal(lower: &[Real], diag: &[Real], upper: &[Real], rhs: &[Real]) -> Vec<Real> {
    let n = diag.len();
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];
    c_prime[0] = upper[0] / diag[0];
    d_prime[0] = rhs[0] / diag[0];
    for i in 1..n {
        let m = diag[i] - lower[i] * c_prime[i - 1];
        c_prime[i] = if i + 1 < n { upper[i] / m } else { 0.0 };
        d_prime[i] = (rhs[i] - lower[i] * d_prime[i - 1]) / m;
    }
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    x
}

// ── Natural spline ────────────────────────────────────────────────────────────

/// Natural cubic spline (C², zero curvature at both ends).
///
/// With two nodes the spline reduces to the straight line through them.
#[derive(Debug, Clone)]
pub struct CubicNaturalSpline {
    xs: Vec<Real>,
    ys: Vec<Real>,
    a: Vec<Real>,
    b: Vec<Real>,
    c: Vec<Real>,
}

impl CubicNaturalSpline {
    /// Build a natural cubic spline through `(xs, ys)`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_nodes(xs, ys, 2)?;
        let n = xs.len();
        let dx: Vec<Real> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let s: Vec<Real> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / dx[i]).collect();

        let mut lower = vec![0.0; n];
        let mut diag = vec![0.0; n];
        let mut upper = vec![0.0; n];
        let mut rhs = vec![0.0; n];

        diag[0] = 2.0;
        upper[0] = 1.0;
        rhs[0] = 3.0 * s[0];
        for i in 1..n - 1 {
            lower[i] = dx[i];
            diag[i] = 2.0 * (dx[i - 1] + dx[i]);
            upper[i] = dx[i - 1];
            rhs[i] = 3.0 * (dx[i] * s[i - 1] + dx[i - 1] * s[i]);
        }
        lower[n - 1] = 1.0;
        diag[n - 1] = 2.0;
        rhs[n - 1] = 3.0 * s[n - 2];

        let ts = solve_tridiagonal(&lower, &diag, &upper, &rhs);
        let (a, b, c) = compute_coefficients(xs, ys, &ts);
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            a,
            b,
            c,
        })
    }

    /// Second derivative at `x`.
    pub fn second_derivative(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        let dx = x - self.xs[i];
        2.0 * self.b[i] + 6.0 * self.c[i] * dx
    }
}

impl Interpolation1D for CubicNaturalSpline {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn operator(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        let dx = x - self.xs[i];
        self.ys[i] + dx * (self.a[i] + dx * (self.b[i] + dx * self.c[i]))
    }

    fn derivative(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        let dx = x - self.xs[i];
        self.a[i] + dx * (2.0 * self.b[i] + 3.0 * dx * self.c[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn passes_through_nodes() {
        let xs = [0.0, 0.5, 1.0, 2.0, 5.0];
        let ys = [0.02, 0.025, 0.027, 0.03, 0.035];
        let spline = CubicNaturalSpline::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert_abs_diff_eq!(spline.operator(*x), *y, epsilon = 1e-14);
        }
    }

    #[test]
    fn natural_end_conditions_and_c2() {
        let xs = [0.0, 1.0, 2.5, 4.0];
        let ys = [1.0, 3.0, 2.0, 5.0];
        let spline = CubicNaturalSpline::new(&xs, &ys).unwrap();
        assert_abs_diff_eq!(spline.second_derivative(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spline.second_derivative(4.0), 0.0, epsilon = 1e-12);
        for &x in &xs[1..3] {
            let h = 1e-7;
            assert_abs_diff_eq!(spline.derivative(x - h), spline.derivative(x + h), epsilon = 1e-5);
            assert_abs_diff_eq!(spline.second_derivative(x - h), spline.second_derivative(x + h), epsilon = 1e-5);
        }
    }

    #[test]
    fn reproduces_straight_lines() {
        let xs = [0.0, 1.0, 3.0, 7.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
        let spline = CubicNaturalSpline::new(&xs, &ys).unwrap();
        assert_abs_diff_eq!(spline.operator(2.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spline.derivative(5.5), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn two_points_is_linear() {
        let spline = CubicNaturalSpline::new(&[0.0, 2.0], &[1.0, 2.0]).unwrap();
        assert_abs_diff_eq!(spline.operator(0.5), 1.25, epsilon = 1e-14);
        assert_abs_diff_eq!(spline.derivative(1.7), 0.5, epsilon = 1e-14);
    }

    #[test]
    fn known_values() {
        // Natural spline through (0,0), (1,1), (2,0): t = [1.5, 0, -1.5]
        let spline = CubicNaturalSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_abs_diff_eq!(spline.derivative(0.0), 1.5, epsilon = 1e-14);
        assert_abs_diff_eq!(spline.derivative(1.0), 0.0, epsilon = 1e-14);
        assert_abs_diff_eq!(spline.operator(0.5), 0.6875, epsilon = 1e-14);
    }
}
