//! `Period`: a time span expressed in a [`TimeUnit`].
//!
//! Tenors are written as an integer followed by a unit letter (`"1W"`,
//! `"6M"`, `"10Y"`, `"2D"`); `"ON"` is the overnight tenor, one day.

use std::str::FromStr;

use crate::frequency::Frequency;
use crate::time_unit::TimeUnit;
use yc_core::errors::{Error, Result};

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// The tenor of one coupon period at `freq`.
    ///
    /// # Errors
    /// Returns an error for `Once`, which has no regular period.
    pub fn from_frequency(freq: Frequency) -> Result<Self> {
        match freq {
            Frequency::Once => Err(Error::InvalidArgument(format!(
                "cannot convert {freq} to a Period"
            ))),
            Frequency::Annual => Ok(Period::new(1, TimeUnit::Years)),
            Frequency::Semiannual => Ok(Period::new(6, TimeUnit::Months)),
            Frequency::Quarterly => Ok(Period::new(3, TimeUnit::Months)),
            Frequency::Bimonthly => Ok(Period::new(2, TimeUnit::Months)),
            Frequency::Monthly => Ok(Period::new(1, TimeUnit::Months)),
            Frequency::Weekly => Ok(Period::new(1, TimeUnit::Weeks)),
            Frequency::Daily => Ok(Period::new(1, TimeUnit::Days)),
        }
    }

    /// Length in whole months, if the period is expressed in months or years.
    pub fn months(&self) -> Option<i32> {
        match self.unit {
            TimeUnit::Months => Some(self.length),
            TimeUnit::Years => Some(self.length * 12),
            TimeUnit::Days | TimeUnit::Weeks => None,
        }
    }

    /// Rough length in years, used for ordering tenors and for guesses.
    pub fn approx_years(&self) -> f64 {
        let n = self.length as f64;
        match self.unit {
            TimeUnit::Days => n / 365.0,
            TimeUnit::Weeks => n * 7.0 / 365.0,
            TimeUnit::Months => n / 12.0,
            TimeUnit::Years => n,
        }
    }

    /// Canonical form: weeks to days, whole-year month counts to years.
    pub fn normalized(self) -> Self {
        match self.unit {
            TimeUnit::Weeks => Period::new(self.length * 7, TimeUnit::Days),
            TimeUnit::Months if self.length % 12 == 0 => {
                Period::new(self.length / 12, TimeUnit::Years)
            }
            _ => self,
        }
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        Period::new(-self.length, self.unit)
    }
}

impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Period::new(self.length * rhs, self.unit)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit.suffix())
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_ascii_uppercase();
        if matches!(text.as_str(), "ON" | "O/N") {
            return Ok(Period::new(1, TimeUnit::Days));
        }
        let bad = || Error::Configuration(format!("cannot parse tenor '{s}'"));
        let split = text.len().checked_sub(1).filter(|&i| i > 0).ok_or_else(bad)?;
        let (number, unit) = text.split_at(split);
        let length: i32 = number.parse().map_err(|_| bad())?;
        let unit = match unit {
            "D" => TimeUnit::Days,
            "W" => TimeUnit::Weeks,
            "M" => TimeUnit::Months,
            "Y" => TimeUnit::Years,
            _ => return Err(bad()),
        };
        Ok(Period::new(length, unit))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
