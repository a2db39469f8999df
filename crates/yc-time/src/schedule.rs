//! `Schedule`: the accrual dates of a coupon leg.
//!
//! A `Schedule` is generated from an effective date, a termination date, a
//! tenor, a calendar and business-day conventions.

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::period::Period;
use yc_core::errors::{Error, Result};

/// Date generation rule for schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateGeneration {
    /// Dates generated backward from the termination date (stub at the
    /// front).
    #[default]
    Backward,
    /// Dates generated forward from the effective date (stub at the back).
    Forward,
    /// Only the effective and termination dates.
    Zero,
}

/// An ordered sequence of accrual dates; `dates[0]` is the effective date.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    dates: Vec<Date>,
}

impl Schedule {
    /// Build a schedule from an explicit, strictly increasing list of dates.
    pub fn from_dates(dates: Vec<Date>) -> Result<Self> {
        if dates.len() < 2 {
            return Err(Error::InvalidArgument(
                "a schedule needs at least two dates".into(),
            ));
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidArgument(
                "schedule dates must be strictly increasing".into(),
            ));
        }
        Ok(Self { dates })
    }

    /// Return all dates in the schedule.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`: a schedule holds at least two dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The effective date.
    pub fn start_date(&self) -> Date {
        self.dates[0]
    }

    /// The termination date.
    pub fn end_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Accrual periods as `(start, end)` pairs.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Builder for [`Schedule`].
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    effective_date: Date,
    termination_date: Date,
    tenor: Period,
    calendar: &'a dyn Calendar,
    convention: BusinessDayConvention,
    termination_convention: BusinessDayConvention,
    rule: DateGeneration,
    end_of_month: bool,
}

impl<'a> ScheduleBuilder<'a> {
    /// Begin building a schedule. Defaults: Modified Following for every
    /// date, backward generation, no end-of-month rule.
    pub fn new(
        effective_date: Date,
        termination_date: Date,
        tenor: Period,
        calendar: &'a dyn Calendar,
    ) -> Self {
        Self {
            effective_date,
            termination_date,
            tenor,
            calendar,
            convention: BusinessDayConvention::ModifiedFollowing,
            termination_convention: BusinessDayConvention::ModifiedFollowing,
            rule: DateGeneration::Backward,
            end_of_month: false,
        }
    }

    /// Set the business-day convention for all but the termination date.
    pub fn with_convention(mut self, c: BusinessDayConvention) -> Self {
        self.convention = c;
        self
    }

    /// Set the business-day convention for the termination date.
    pub fn with_termination_convention(mut self, c: BusinessDayConvention) -> Self {
        self.termination_convention = c;
        self
    }

    /// Set the date-generation rule.
    pub fn with_rule(mut self, rule: DateGeneration) -> Self {
        self.rule = rule;
        self
    }

    /// Whether to snap dates to the end of the month.
    pub fn end_of_month(mut self, flag: bool) -> Self {
        self.end_of_month = flag;
        self
    }

    fn roll(&self, unadjusted: Date, convention: BusinessDayConvention, eom: bool) -> Result<Date> {
        if eom {
            self.calendar.end_of_month(unadjusted)
        } else {
            self.calendar.adjust(unadjusted, convention)
        }
    }

    /// Build the `Schedule`.
    pub fn build(self) -> Result<Schedule> {
        let start = self.effective_date;
        let end = self.termination_date;
        if start >= end {
            return Err(Error::InvalidArgument(format!(
                "effective date {start} must be before termination date {end}"
            )));
        }
        if self.tenor.length < 0 {
            return Err(Error::InvalidArgument(format!(
                "negative schedule tenor {}",
                self.tenor
            )));
        }

        let first = self.calendar.adjust(start, self.convention)?;
        let last = self.calendar.adjust(end, self.termination_convention)?;
        if self.tenor.length == 0 || self.rule == DateGeneration::Zero {
            return Schedule::from_dates(vec![first, last]);
        }

        let mut inner: Vec<Date> = Vec::new();
        match self.rule {
            DateGeneration::Forward => {
                let eom = self.end_of_month && self.calendar.is_end_of_month(start)?;
                for n in 1.. {
                    let next = start.advance(n * self.tenor.length, self.tenor.unit)?;
                    if next >= end {
                        break;
                    }
                    inner.push(self.roll(next, self.convention, eom)?);
                }
            }
            DateGeneration::Backward | DateGeneration::Zero => {
                let eom = self.end_of_month && self.calendar.is_end_of_month(end)?;
                for n in 1.. {
                    let prev = end.advance(-n * self.tenor.length, self.tenor.unit)?;
                    if prev <= start {
                        break;
                    }
                    inner.push(self.roll(prev, self.convention, eom)?);
                }
                inner.reverse();
            }
        }

        let mut dates = Vec::with_capacity(inner.len() + 2);
        dates.push(first);
        dates.extend(inner);
        dates.push(last);
        // Adjustment can collapse a short stub onto its neighbour.
        dates.dedup();
        Schedule::from_dates(dates)
    }
}
