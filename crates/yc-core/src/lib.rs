//! # yc-core
//!
//! Core types, the error taxonomy, and relinkable handles shared by every
//! crate of the yield-curve workspace.
//!
//! This crate provides the foundational building blocks: type aliases for
//! rates, times and discount factors, the [`Compounding`] convention, the
//! [`Error`] enum with its `ensure!` / `ensure_config!` / `fail!` macros,
//! and [`RelinkableHandle`], the late-bound slot an index uses to reach its
//! forwarding curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Compounding conventions.
pub mod compounding;

/// Error types and the `ensure!` / `ensure_config!` / `fail!` macros.
pub mod errors;

/// Late-bound shared reference (`RelinkableHandle<T>`).
pub mod handle;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// Integer type used for signed day and period counts.
pub type Integer = i32;

/// Non-negative integer type.
pub type Natural = u32;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate.
pub type Spread = Real;

/// A discount factor, normally in (0, 1].
pub type DiscountFactor = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use compounding::Compounding;
pub use errors::{Error, Result};
pub use handle::RelinkableHandle;
