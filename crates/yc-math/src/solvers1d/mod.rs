//! 1D root-finding solvers.
//!
//! [`Brent`] finds a root of `f(x) = 0`, either inside a caller-supplied
//! bracket or by first growing a bracket geometrically around a guess. The
//! objective is `FnMut` so that callers can mutate a trial state (for
//! example a curve node) on every evaluation.

use thiserror::Error;
use yc_core::{
    errors::{Error, Result},
    Real,
};

const MAX_EVALUATIONS: usize = 100;
const DEFAULT_ACCURACY: Real = 1.0e-11;
const GROWTH_FACTOR: Real = 1.6;

/// A located root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Abscissa of the root.
    pub x: Real,
    /// Objective value at `x`.
    pub residual: Real,
    /// Number of objective evaluations used.
    pub evaluations: usize,
}

/// Why a root search stopped without a root.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{reason} after {evaluations} evaluations (x = {x}, f(x) = {residual:e})")]
pub struct SolveFailure {
    /// What went wrong.
    pub reason: String,
    /// Last abscissa evaluated.
    pub x: Real,
    /// Objective value at `x`.
    pub residual: Real,
    /// Number of objective evaluations used.
    pub evaluations: usize,
}

impl From<SolveFailure> for Error {
    fn from(failure: SolveFailure) -> Self {
        Error::Runtime(failure.to_string())
    }
}

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method: bisection, secant and inverse quadratic interpolation.
///
/// The search stops when `|f(x)| <= function_accuracy` or the bracket is
/// narrower than `accuracy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brent {
    /// Absolute tolerance on `x`.
    pub accuracy: Real,
    /// Absolute tolerance on `f(x)`.
    pub function_accuracy: Real,
    /// Evaluation budget, bracketing included.
    pub max_evaluations: usize,
    /// Lower limit for bracket expansion.
    pub lower_bound: Option<Real>,
    /// Upper limit for bracket expansion.
    pub upper_bound: Option<Real>,
}

impl Default for Brent {
    fn default() -> Self {
        Self::new(DEFAULT_ACCURACY, MAX_EVALUATIONS)
    }
}

impl Brent {
    /// Solver with equal `x` and `f(x)` tolerances and no bounds.
    pub fn new(accuracy: Real, max_evaluations: usize) -> Self {
        Self {
            accuracy,
            function_accuracy: accuracy,
            max_evaluations,
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// Use a separate tolerance on `f(x)`.
    pub fn with_function_accuracy(mut self, function_accuracy: Real) -> Self {
        self.function_accuracy = function_accuracy;
        self
    }

    /// Restrict bracket expansion to `[lower, upper]`.
    pub fn with_bounds(mut self, lower: Real, upper: Real) -> Self {
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self
    }

    fn enforce_bounds(&self, x: Real) -> Real {
        let x = self.lower_bound.map_or(x, |lo| x.max(lo));
        self.upper_bound.map_or(x, |hi| x.min(hi))
    }

    /// Find a root starting from `guess`, growing the bracket `guess ± step`
    /// by a factor of 1.6 on the side with the smaller `|f|` until the sign
    /// changes.
    pub fn solve<F>(&self, mut f: F, guess: Real, step: Real) -> std::result::Result<Root, SolveFailure>
    where
        F: FnMut(Real) -> Real,
    {
        let failure = |reason: &str, x: Real, residual: Real, evaluations: usize| SolveFailure {
            reason: reason.to_string(),
            x,
            residual,
            evaluations,
        };

        let root = self.enforce_bounds(guess);
        let f_root = f(root);
        if !f_root.is_finite() {
            return Err(failure("objective is not finite", root, f_root, 1));
        }
        if f_root.abs() <= self.function_accuracy {
            return Ok(Root {
                x: root,
                residual: f_root,
                evaluations: 1,
            });
        }

        let step = step.abs().max(f64::EPSILON);
        let (mut x_min, mut f_min, mut x_max, mut f_max);
        if f_root > 0.0 {
            x_min = self.enforce_bounds(root - step);
            f_min = f(x_min);
            x_max = root;
            f_max = f_root;
        } else {
            x_min = root;
            f_min = f_root;
            x_max = self.enforce_bounds(root + step);
            f_max = f(x_max);
        }
        let mut evaluations = 2;

        while evaluations <= self.max_evaluations {
            if !f_min.is_finite() {
                return Err(failure("objective is not finite", x_min, f_min, evaluations));
            }
            if !f_max.is_finite() {
                return Err(failure("objective is not finite", x_max, f_max, evaluations));
            }
            if f_min * f_max <= 0.0 {
                return brent_core(self, &mut f, x_min, f_min, x_max, f_max, evaluations);
            }
            if f_min.abs() < f_max.abs() {
                let next = self.enforce_bounds(x_min + GROWTH_FACTOR * (x_min - x_max));
                if next == x_min {
                    return Err(failure("no root bracketed within bounds", x_min, f_min, evaluations));
                }
                x_min = next;
                f_min = f(x_min);
            } else {
                let next = self.enforce_bounds(x_max + GROWTH_FACTOR * (x_max - x_min));
                if next == x_max {
                    return Err(failure("no root bracketed within bounds", x_max, f_max, evaluations));
                }
                x_max = next;
                f_max = f(x_max);
            }
            evaluations += 1;
        }

        let (x, residual) = if f_min.abs() < f_max.abs() {
            (x_min, f_min)
        } else {
            (x_max, f_max)
        };
        Err(failure("unable to bracket a root", x, residual, evaluations))
    }

    /// Find a root inside `[x_min, x_max]`; `f` must change sign there.
    pub fn solve_bracketed<F>(&self, mut f: F, x_min: Real, x_max: Real) -> std::result::Result<Root, SolveFailure>
    where
        F: FnMut(Real) -> Real,
    {
        let fa = f(x_min);
        let fb = f(x_max);
        if fa * fb > 0.0 || !fa.is_finite() || !fb.is_finite() {
            return Err(SolveFailure {
                reason: format!("f({x_min}) and f({x_max}) must have opposite signs"),
                x: x_max,
                residual: fb,
                evaluations: 2,
            });
        }
        brent_core(self, &mut f, x_min, fa, x_max, fb, 2)
    }
}

fn brent_core<F>(
    solver: &Brent,
    f: &mut F,
    x_min: Real,
    f_min: Real,
    x_max: Real,
    f_max: Real,
    mut evaluations: usize,
) -> std::result::Result<Root, SolveFailure>
where
    F: FnMut(Real) -> Real,
{
    let acc = if solver.accuracy > 0.0 {
        solver.accuracy
    } else {
        DEFAULT_ACCURACY
    };
    let (mut a, mut fa, mut b, mut fb) = (x_min, f_min, x_max, f_max);
    if fa == 0.0 {
        return Ok(Root {
            x: a,
            residual: 0.0,
            evaluations,
        });
    }
    if fb == 0.0 {
        return Ok(Root {
            x: b,
            residual: 0.0,
            evaluations,
        });
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    while evaluations <= solver.max_evaluations {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb.abs() <= solver.function_accuracy {
            return Ok(Root {
                x: b,
                residual: fb,
                evaluations,
            });
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (p, q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                let p = s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0));
                (p, (q - 1.0) * (r - 1.0) * (s - 1.0))
            };
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
        evaluations += 1;
        if !fb.is_finite() {
            return Err(SolveFailure {
                reason: "objective is not finite".into(),
                x: b,
                residual: fb,
                evaluations,
            });
        }
    }
    Err(SolveFailure {
        reason: "maximum evaluations reached".into(),
        x: b,
        residual: fb,
        evaluations,
    })
}

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: FnMut(Real) -> Real,
{
    Ok(Brent::new(accuracy, MAX_EVALUATIONS)
        .solve_bracketed(f, x_min, x_max)?
        .x)
}
