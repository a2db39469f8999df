//! # yc-bootstrap
//!
//! Bootstrapping of yield curves from market quotes.
//!
//! A [`RateHelper`] turns one quote (deposit, FRA, OIS or swap) into a
//! constraint at its pillar date. The [`Bootstrapper`] solves the pillar
//! values of an [`InterpolatedCurve`](yc_termstructures::InterpolatedCurve)
//! so that every helper reprices its quote, and returns the result as a
//! [`PiecewiseYieldCurve`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use yc_bootstrap::{DepositRateHelper, PiecewiseYieldCurve, RateHelper};
//! use yc_termstructures::{Interpolation, YieldTermStructure};
//! use yc_time::{Actual360, Date};
//!
//! let today = Date::from_ymd(2025, 1, 2).unwrap();
//! let helpers: Vec<RateHelper> = vec![
//!     DepositRateHelper::new(0.04, today, Date::from_ymd(2025, 4, 2).unwrap(), Arc::new(Actual360), today)
//!         .unwrap()
//!         .into(),
//!     DepositRateHelper::new(0.045, today, Date::from_ymd(2025, 7, 2).unwrap(), Arc::new(Actual360), today)
//!         .unwrap()
//!         .into(),
//! ];
//! let curve = PiecewiseYieldCurve::new(today, helpers, Arc::new(Actual360), Interpolation::LinearZero).unwrap();
//! assert!(curve.discount(Date::from_ymd(2025, 6, 2).unwrap()).unwrap() < 1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rate helpers: one market quote constraining one pillar.
pub mod rate_helpers;

/// The pillar-by-pillar and global bootstrap.
pub mod bootstrap;

/// `PiecewiseYieldCurve`: the bootstrapped curve with its helpers.
pub mod piecewise_yield_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bootstrap::{BootstrapConfig, Bootstrapper, MAX_RATE, MIN_RATE};
pub use piecewise_yield_curve::PiecewiseYieldCurve;
pub use rate_helpers::{
    DepositRateHelper, FixedLegConventions, FraRateHelper, InstrumentKind, OisRateHelper, RateHelper,
    SwapRateHelper,
};
