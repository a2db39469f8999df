//! `TermStructure`: base trait for all term structures.
//!
//! Every term structure has a **reference date**, a **day counter**, and a
//! **maximum date**. Queries past the maximum date are only answered when
//! extrapolation is allowed.

use yc_core::{Error, Result, Time};
use yc_time::{Date, DayCounter};

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date at which discount = 1.0 and from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time-fraction conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The latest date for which the curve is defined without extrapolation.
    fn max_date(&self) -> Date;

    /// Whether queries beyond [`max_date`](Self::max_date) are answered.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// The latest time for which the curve is defined.
    fn max_time(&self) -> Time {
        self.time_from_reference(self.max_date())
    }

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter().year_fraction(self.reference_date(), date)
    }

    /// Fail with [`Error::OutOfRange`] if `date` cannot be queried.
    fn check_range(&self, date: Date) -> Result<()> {
        let reference = self.reference_date();
        if date < reference {
            return Err(Error::OutOfRange(format!(
                "date {date} is before the reference date {reference}"
            )));
        }
        if date > self.max_date() && !self.allows_extrapolation() {
            return Err(Error::OutOfRange(format!(
                "date {date} is past the max curve date {} and extrapolation is disabled",
                self.max_date()
            )));
        }
        Ok(())
    }
}
