//! TARGET (Trans-European Automated Real-time Gross Settlement) calendar.

use crate::calendar::Calendar;
use crate::date::Date;

use super::is_easter_holiday;

/// TARGET calendar (ECB's settlement system).
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Good Friday and Easter Monday (from 2000)
/// * Labour Day (May 1, from 2000)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
/// * December 31 in 1998, 1999 and 2001
#[derive(Debug, Clone, Copy, Default)]
pub struct Target;

impl Calendar for Target {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.weekday().is_weekend() {
            return false;
        }
        let (y, m, d) = date.ymd();
        let holiday = (d == 1 && m == 1)
            || (y >= 2000 && is_easter_holiday(date))
            || (d == 1 && m == 5 && y >= 2000)
            || (d == 25 && m == 12)
            || (d == 26 && m == 12)
            || (d == 31 && m == 12 && matches!(y, 1998 | 1999 | 2001));
        !holiday
    }
}
