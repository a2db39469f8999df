//! `DayCounter` trait and the day-count conventions used by the supported
//! indexes and swap legs.
//!
//! A day counter computes the fraction of a year between two dates, used
//! when discounting or accruing interest and when mapping pillar dates to
//! curve times.

use std::str::FromStr;
use std::sync::Arc;

use crate::date::{is_leap_year, Date};
use yc_core::errors::Error;
use yc_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`; negative if `d2 < d1`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed): `actual_days / 365`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360: `actual_days / 360`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// 30/360 Bond Basis.
///
/// `days = 360(Y2−Y1) + 30(M2−M1) + (D2−D1)` after the adjustments
/// `D1 = 31 → 30` and `D2 = 31 → 30` when `D1 ≥ 30`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360 (Bond Basis)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let (y1, m1, dd1) = d1.ymd();
        let (y2, m2, dd2) = d2.ymd();
        let mut dd1 = dd1 as i64;
        let mut dd2 = dd2 as i64;
        if dd1 == 31 {
            dd1 = 30;
        }
        if dd2 == 31 && dd1 >= 30 {
            dd2 = 30;
        }
        360 * (y2 as i64 - y1 as i64) + 30 * (m2 as i64 - m1 as i64) + (dd2 - dd1)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA).
///
/// The period is split at year boundaries; days falling in a leap year
/// count 1/366, all others 1/365.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        (d2 - d1) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d1 == d2 {
            return 0.0;
        }
        if d2 < d1 {
            return -self.year_fraction(d2, d1);
        }
        let basis = |y: u16| if is_leap_year(y) { 366.0 } else { 365.0 };
        let (y1, y2) = (d1.year(), d2.year());
        if y1 == y2 {
            return (d2 - d1) as Real / basis(y1);
        }
        let mut total = 0.0;
        let mut from = d1;
        for y in y1..y2 {
            // Jan 1 of y + 1 is always representable: y2 is.
            let Ok(next) = Date::from_ymd(y + 1, 1, 1) else {
                break;
            };
            total += (next - from) as Real / basis(y);
            from = next;
        }
        total + (d2 - from) as Real / basis(y2)
    }
}

/// Day-count conventions that can be chosen by name in a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCounterKind {
    /// Actual/360.
    Actual360,
    /// Actual/365 (Fixed).
    #[default]
    Actual365Fixed,
    /// 30/360 Bond Basis.
    Thirty360,
    /// Actual/Actual (ISDA).
    ActualActualIsda,
}

impl DayCounterKind {
    /// Instantiate the day counter.
    pub fn build(self) -> Arc<dyn DayCounter> {
        match self {
            DayCounterKind::Actual360 => Arc::new(Actual360),
            DayCounterKind::Actual365Fixed => Arc::new(Actual365Fixed),
            DayCounterKind::Thirty360 => Arc::new(Thirty360),
            DayCounterKind::ActualActualIsda => Arc::new(ActualActualIsda),
        }
    }
}

impl FromStr for DayCounterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "actual360" | "act360" | "a360" => Ok(DayCounterKind::Actual360),
            "actual365fixed" | "act365fixed" | "actual365" | "act365" | "a365f" => {
                Ok(DayCounterKind::Actual365Fixed)
            }
            "thirty360" | "30360" | "30360bondbasis" => Ok(DayCounterKind::Thirty360),
            "actualactualisda" | "actactisda" | "actualactual" => {
                Ok(DayCounterKind::ActualActualIsda)
            }
            _ => Err(Error::Configuration(format!("unknown day counter '{s}'"))),
        }
    }
}
