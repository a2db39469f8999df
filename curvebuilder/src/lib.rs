//! # curvebuilder
//!
//! Configuration-driven yield curves. A [`CurveConfig`] names an index, a
//! list of quoted instruments and the conventions to bootstrap under;
//! [`IrDataCurve`] bootstraps it, links the index to the result and answers
//! discount-factor and zero-rate queries.
//!
//! This crate is also a façade over the `yc-*` crates, re-exported as
//! modules.
//!
//! ```rust
//! use curvebuilder::{CurveConfig, IrDataCurve};
//!
//! let config = CurveConfig::from_toml_str(r#"
//!     valuation_date = "2024-01-02"
//!     index = "ESTR"
//!     tenors = ["1M", "3M", "6M", "1Y", "2Y"]
//!     rates = [3.90, 3.93, 3.85, 3.60, 3.10]
//!     instruments = ["OIS", "OIS", "OIS", "OIS", "OIS"]
//! "#).unwrap();
//! let curve = IrDataCurve::new(config).unwrap();
//! let report = curve.report().unwrap();
//! assert!(report.max_abs_error() < 1e-10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CurveConfig`: curve inputs and their TOML/JSON loaders.
pub mod config;

/// `IrDataCurve` and parallel curve construction.
pub mod ir_data_curve;

/// Calibration report.
pub mod report;

// ── Workspace crates ──────────────────────────────────────────────────────────

/// Core types, aliases, errors and handles.
pub use yc_core as core;

/// Dates, calendars, day counters and schedules.
pub use yc_time as time;

/// Interpolation kernels and root finding.
pub use yc_math as math;

/// Yield term structures and interpolation strategies.
pub use yc_termstructures as termstructures;

/// Interest-rate indexes.
pub use yc_indexes as indexes;

/// Rate helpers and the bootstrapper.
pub use yc_bootstrap as bootstrap;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::CurveConfig;
pub use ir_data_curve::{build_curves, IrDataCurve};
pub use report::{CurveReport, ReportRow};
pub use yc_core::{Error, Result};
