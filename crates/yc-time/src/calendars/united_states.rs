//! United States settlement calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::weekday::Weekday;

/// United States settlement (federal holidays) calendar.
///
/// Holidays, with Saturday dates moved to Friday and Sunday dates to Monday:
/// * New Year's Day (Jan 1; a Saturday holiday moves to Friday Dec 31)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1983)
/// * Presidents' Day (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2022)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans' Day (Nov 11)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesSettlement;

impl Calendar for UnitedStatesSettlement {
    fn name(&self) -> &str {
        "US (Settlement)"
    }

    fn is_business_day(&self, date: Date) -> bool {
        let w = date.weekday();
        if w.is_weekend() {
            return false;
        }
        let (y, m, d) = date.ymd();
        !is_settlement_holiday(y, m, d, w)
    }
}

/// `true` if `(m, d)` is the observed date of a fixed holiday on `month/day`.
fn observed(m: u8, d: u8, w: Weekday, month: u8, day: u8) -> bool {
    (m == month && d == day)
        || (m == month && d == day + 1 && w == Weekday::Monday)
        || (m == month && d + 1 == day && w == Weekday::Friday)
}

fn is_settlement_holiday(y: u16, m: u8, d: u8, w: Weekday) -> bool {
    let monday = w == Weekday::Monday;
    (m == 1 && (d == 1 || (d == 2 && monday)))
        || (m == 12 && d == 31 && w == Weekday::Friday)
        || (y >= 1983 && m == 1 && monday && (15..=21).contains(&d))
        || (m == 2 && monday && (15..=21).contains(&d))
        || (m == 5 && monday && d >= 25)
        || (y >= 2022 && observed(m, d, w, 6, 19))
        || observed(m, d, w, 7, 4)
        || (m == 9 && monday && d <= 7)
        || (m == 10 && monday && (8..=14).contains(&d))
        || observed(m, d, w, 11, 11)
        || (m == 11 && w == Weekday::Thursday && (22..=28).contains(&d))
        || observed(m, d, w, 12, 25)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn federal_holidays_2024() {
        let cal = UnitedStatesSettlement;
        for (m, d) in [(1, 1), (1, 15), (2, 19), (5, 27), (6, 19), (7, 4), (9, 2), (10, 14), (11, 11), (11, 28), (12, 25)] {
            assert!(!cal.is_business_day(date(2024, m, d)), "2024-{m:02}-{d:02}");
        }
    }

    #[test]
    fn weekend_holidays_are_observed() {
        let cal = UnitedStatesSettlement;
        // July 4, 2026 is a Saturday: observed Friday July 3
        assert!(!cal.is_business_day(date(2026, 7, 3)));
        // Christmas 2022 is a Sunday: observed Monday December 26
        assert!(!cal.is_business_day(date(2022, 12, 26)));
    }

    #[test]
    fn normal_day() {
        assert!(UnitedStatesSettlement.is_business_day(date(2024, 3, 28)));
    }
}
