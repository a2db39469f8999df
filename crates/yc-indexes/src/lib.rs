//! # yc-indexes
//!
//! Floating-rate index definitions used to build and project yield curves.
//!
//! An index carries its market conventions, a store of historical fixings,
//! and a [`RelinkableHandle`](yc_core::RelinkableHandle) to the curve that
//! forecasts its future fixings. The handle may be empty when the index is
//! created and linked once the curve has been bootstrapped.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Index` trait: base trait for all market indexes.
pub mod index;

/// `InterestRateIndex`: conventions and curve-based forecasting.
pub mod interest_rate_index;

/// `IborIndex`: interbank offered-rate indexes (Euribor, STIBOR).
pub mod ibor_index;

/// `OvernightIndex`: overnight rate indexes (SOFR, ESTR, SONIA).
pub mod overnight_index;

/// Concrete IBOR index definitions.
pub mod ibor;

/// Concrete overnight index definitions.
pub mod overnight;

/// Lookup of indexes by configuration name.
pub mod registry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use ibor::{euribor, stibor};
pub use ibor_index::IborIndex;
pub use index::{FixingStore, Index};
pub use interest_rate_index::{IndexConventions, InterestRateIndex};
pub use overnight::{estr, sofr, sonia};
pub use overnight_index::OvernightIndex;
pub use registry::{index_by_name, RateIndex};
