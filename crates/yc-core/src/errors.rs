//! Error types for the yield-curve workspace.
//!
//! Every fallible operation returns [`Result`]. Failures fall into a small
//! taxonomy: configuration problems detected before any numerical work,
//! calibration failures raised by the bootstrapper, out-of-range curve
//! queries, and unlinked handles. The `ensure!`, `ensure_config!` and `fail!`
//! macros build the common variants.

use thiserror::Error;

use crate::Real;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid inputs detected before calibration: mismatched sequence
    /// lengths, unknown instrument tags or index names, duplicate pillars.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The solver could not reprice a helper, or the global sweep limit was
    /// exceeded.
    #[error("calibration failed for {helper} (pillar {pillar}): {reason}; last residual {residual:e}")]
    Calibration {
        /// Label of the offending rate helper.
        helper: String,
        /// Pillar date of the offending helper.
        pillar: String,
        /// Last observed residual `implied - quoted`.
        residual: Real,
        /// What went wrong.
        reason: String,
    },

    /// A curve was queried outside its domain.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A relinkable handle was dereferenced before being linked.
    #[error("empty handle: {0}")]
    EmptyHandle(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// `true` for [`Error::Calibration`].
    pub fn is_calibration(&self) -> bool {
        matches!(self, Error::Calibration { .. })
    }

    /// `true` for [`Error::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use yc_core::ensure;
/// fn positive(x: f64) -> yc_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use yc_core::ensure_config;
/// fn same_len(a: &[f64], b: &[f64]) -> yc_core::Result<()> {
///     ensure_config!(a.len() == b.len(), "{} tenors but {} rates", a.len(), b.len());
///     Ok(())
/// }
/// assert!(same_len(&[1.0], &[2.0]).is_ok());
/// assert!(same_len(&[1.0], &[]).unwrap_err().is_configuration());
/// ```
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use yc_core::fail;
/// fn always_err() -> yc_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_message_names_helper_and_pillar() {
        let err = Error::Calibration {
            helper: "SWAP 10Y".into(),
            pillar: "2034-03-31".into(),
            residual: 1.5e-3,
            reason: "no root bracketed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SWAP 10Y"));
        assert!(msg.contains("2034-03-31"));
        assert!(err.is_calibration());
        assert!(!err.is_configuration());
    }

    #[test]
    fn predicates() {
        assert!(Error::OutOfRange("x".into()).is_out_of_range());
        assert!(Error::Configuration("x".into()).is_configuration());
        assert!(!Error::Runtime("x".into()).is_out_of_range());
    }
}
