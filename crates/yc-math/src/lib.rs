//! # yc-math
//!
//! Mathematical kernels for curve construction: one-dimensional
//! interpolation schemes and bracketing root finders.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D interpolation schemes.
pub mod interpolations;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::{
    BackwardFlatInterpolation, CubicNaturalSpline, Interpolation1D, LinearInterpolation, LogCubicInterpolation,
    LogLinearInterpolation,
};
pub use solvers1d::{brent, Brent, Root, SolveFailure};
