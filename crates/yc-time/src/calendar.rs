//! `Calendar` trait and the holiday-free calendars.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`]. Date arithmetic near the ends
//! of the supported range can fail, so adjustments return [`Result`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use yc_core::errors::Result;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"TARGET"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> Result<bool> {
        let next = self.adjust(date.add_days(1)?, BusinessDayConvention::Following)?;
        Ok(date.month() != next.month())
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Result<Date> {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        let roll = |mut d: Date, step: i32| -> Result<Date> {
            while self.is_holiday(d) {
                d = d.add_days(step)?;
            }
            Ok(d)
        };
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => roll(date, 1),
            BusinessDayConvention::Preceding => roll(date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = roll(date, 1)?;
                if adjusted.month() != date.month() {
                    roll(date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = roll(date, -1)?;
                if adjusted.month() != date.month() {
                    roll(date, 1)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// Advance `date` by `n` business days. `n == 0` rolls a holiday forward.
    fn advance_business_days(&self, date: Date, n: i32) -> Result<Date> {
        if n == 0 {
            return self.adjust(date, BusinessDayConvention::Following);
        }
        let step: i32 = if n > 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        let mut d = date;
        while remaining > 0 {
            d = d.add_days(step)?;
            if self.is_business_day(d) {
                remaining -= 1;
            }
        }
        Ok(d)
    }

    /// Advance `date` by `period` and adjust the result.
    ///
    /// Day periods count business days. Week, month and year periods move on
    /// the calendar and then apply `convention`; with `end_of_month` set, a
    /// start on the last business day of a month lands on the last business
    /// day of the target month.
    fn advance(
        &self,
        date: Date,
        period: Period,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Date> {
        match period.unit {
            TimeUnit::Days => self.advance_business_days(date, period.length),
            TimeUnit::Weeks => self.adjust(date.advance(period.length, period.unit)?, convention),
            TimeUnit::Months | TimeUnit::Years => {
                let moved = date.advance(period.length, period.unit)?;
                if end_of_month && self.is_end_of_month(date)? {
                    self.end_of_month(moved)
                } else {
                    self.adjust(moved, convention)
                }
            }
        }
    }

    /// Count the business days in `(d1, d2]`. Negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|d| self.is_business_day(*d))
            .count() as i32;
        sign * count
    }
}

/// A null calendar: every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }
}

/// Saturdays and Sundays are the only non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.weekday().is_weekend()
    }
}
