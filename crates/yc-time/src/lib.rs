//! # yc-time
//!
//! Date, period, calendar, day counter, schedule, business-day-convention
//! and interest-rate types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the holiday-free calendars.
pub mod calendar;

/// Concrete calendar implementations (TARGET, US, UK).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Payment / event frequency.
pub mod frequency;

/// `InterestRate`: a rate with its conventions.
pub mod interest_rate;

/// `Period`: a time span in a `TimeUnit`.
pub mod period;

/// `Schedule`: an ordered sequence of accrual dates.
pub mod schedule;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use calendars::{CalendarKind, Target, UnitedKingdomSettlement, UnitedStatesSettlement};
pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, ActualActualIsda, DayCounter, DayCounterKind, Thirty360};
pub use frequency::Frequency;
pub use interest_rate::InterestRate;
pub use period::Period;
pub use schedule::{DateGeneration, Schedule, ScheduleBuilder};
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
