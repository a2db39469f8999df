//! Pillar interpolation strategies.
//!
//! A strategy fixes two things: the quantity stored at each pillar (its
//! [`ValueSpace`]) and the 1D kernel that joins the pillars. Local
//! strategies move only the segments adjacent to a pillar when its value
//! changes; global strategies (the cubic splines) move the whole curve.

use std::fmt;
use std::str::FromStr;

use yc_core::{Error, Real, Result};
use yc_math::{
    BackwardFlatInterpolation, CubicNaturalSpline, Interpolation1D, LinearInterpolation,
    LogCubicInterpolation, LogLinearInterpolation,
};

/// Quantity stored at each pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSpace {
    /// Continuously-compounded zero rate under the curve day counter.
    ZeroRate,
    /// Discount factor.
    DiscountFactor,
    /// Instantaneous forward rate on the segment ending at the pillar.
    ForwardRate,
}

/// Interpolation strategy over curve pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Interpolation {
    /// Linear in zero rates.
    #[default]
    LinearZero,
    /// Natural cubic spline in zero rates.
    CubicZero,
    /// Linear in log discount factors.
    LogLinearDiscount,
    /// Natural cubic spline in log discount factors.
    LogCubicDiscount,
    /// Piecewise-constant (backward-flat) instantaneous forwards.
    FlatForward,
}

impl Interpolation {
    /// All strategies, in declaration order.
    pub const ALL: [Interpolation; 5] = [
        Interpolation::LinearZero,
        Interpolation::CubicZero,
        Interpolation::LogLinearDiscount,
        Interpolation::LogCubicDiscount,
        Interpolation::FlatForward,
    ];

    /// Quantity stored at each pillar.
    pub fn value_space(self) -> ValueSpace {
        match self {
            Interpolation::LinearZero | Interpolation::CubicZero => ValueSpace::ZeroRate,
            Interpolation::LogLinearDiscount | Interpolation::LogCubicDiscount => ValueSpace::DiscountFactor,
            Interpolation::FlatForward => ValueSpace::ForwardRate,
        }
    }

    /// `true` if moving one pillar changes the curve before the previous
    /// pillar.
    pub fn is_global(self) -> bool {
        matches!(self, Interpolation::CubicZero | Interpolation::LogCubicDiscount)
    }

    /// The local strategy in the same value space.
    pub fn local_counterpart(self) -> Interpolation {
        match self {
            Interpolation::CubicZero => Interpolation::LinearZero,
            Interpolation::LogCubicDiscount => Interpolation::LogLinearDiscount,
            other => other,
        }
    }

    /// Configuration name, e.g. `"linear-zero"`.
    pub fn name(self) -> &'static str {
        match self {
            Interpolation::LinearZero => "linear-zero",
            Interpolation::CubicZero => "cubic-zero",
            Interpolation::LogLinearDiscount => "log-linear-discount",
            Interpolation::LogCubicDiscount => "log-cubic-discount",
            Interpolation::FlatForward => "flat-forward",
        }
    }

    pub(crate) fn build(self, xs: &[Real], ys: &[Real]) -> Result<Interpolant> {
        Ok(match self {
            Interpolation::LinearZero => Interpolant::Linear(LinearInterpolation::new(xs, ys)?),
            Interpolation::CubicZero => Interpolant::Cubic(CubicNaturalSpline::new(xs, ys)?),
            Interpolation::LogLinearDiscount => Interpolant::LogLinear(LogLinearInterpolation::new(xs, ys)?),
            Interpolation::LogCubicDiscount => Interpolant::LogCubic(LogCubicInterpolation::new(xs, ys)?),
            Interpolation::FlatForward => Interpolant::BackwardFlat(BackwardFlatInterpolation::new(xs, ys)?),
        })
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Interpolation::ALL
            .into_iter()
            .find(|i| i.name() == key)
            .ok_or_else(|| Error::Configuration(format!("unknown interpolation '{s}'")))
    }
}

/// A built kernel for one of the strategies.
#[derive(Debug, Clone)]
pub(crate) enum Interpolant {
    Linear(LinearInterpolation),
    Cubic(CubicNaturalSpline),
    LogLinear(LogLinearInterpolation),
    LogCubic(LogCubicInterpolation),
    BackwardFlat(BackwardFlatInterpolation),
}

impl Interpolant {
    pub(crate) fn kernel(&self) -> &dyn Interpolation1D {
        match self {
            Interpolant::Linear(i) => i,
            Interpolant::Cubic(i) => i,
            Interpolant::LogLinear(i) => i,
            Interpolant::LogCubic(i) => i,
            Interpolant::BackwardFlat(i) => i,
        }
    }
}
