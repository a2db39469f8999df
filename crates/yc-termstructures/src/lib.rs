//! # yc-termstructures
//!
//! Yield term structures: the `TermStructure` / `YieldTermStructure` traits,
//! a constant-forward curve, and the pillar-based `InterpolatedCurve` with
//! its five interpolation strategies.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure`: reference date, day counter and valid date range.
pub mod term_structure;

/// `YieldTermStructure`: discount, zero-rate and forward-rate queries.
pub mod yield_term_structure;

/// `FlatForward`: constant forward-rate yield curve.
pub mod flat_forward;

/// `Interpolation`: pillar interpolation strategies and their value spaces.
pub mod interpolation;

/// `InterpolatedCurve`: yield curve interpolated over pillar nodes.
pub mod interpolated_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use flat_forward::FlatForward;
pub use interpolated_curve::InterpolatedCurve;
pub use interpolation::{Interpolation, ValueSpace};
pub use term_structure::TermStructure;
pub use yield_term_structure::YieldTermStructure;
