//! United Kingdom settlement calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::weekday::Weekday;

use super::is_easter_holiday;

/// United Kingdom settlement (London) calendar.
///
/// Holidays:
/// * New Year's Day (Jan 1; if on a weekend, the following Monday)
/// * Good Friday and Easter Monday
/// * Early May Bank Holiday (1st Mon in May; May 8 in 2020 and 2023)
/// * Spring Bank Holiday (last Mon in May; June 3–4 in 2002, June 4–5 in 2012,
///   June 2–3 in 2022)
/// * Summer Bank Holiday (last Mon in Aug)
/// * Christmas Day and Boxing Day, with weekend substitutes
/// * One-off holidays (2011 Royal Wedding, 2022 State Funeral, 2023 Coronation)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdomSettlement;

impl Calendar for UnitedKingdomSettlement {
    fn name(&self) -> &str {
        "UK (Settlement)"
    }

    fn is_business_day(&self, date: Date) -> bool {
        let w = date.weekday();
        if w.is_weekend() {
            return false;
        }
        let (y, m, d) = date.ymd();
        let monday = w == Weekday::Monday;
        let early_may = if y == 2020 {
            m == 5 && d == 8
        } else {
            m == 5 && monday && d <= 7
        };
        let spring = match y {
            2002 => m == 6 && (d == 3 || d == 4),
            2012 => m == 6 && (d == 4 || d == 5),
            2022 => m == 6 && (d == 2 || d == 3),
            _ => m == 5 && monday && d >= 25,
        };
        let holiday = (m == 1 && (d == 1 || ((d == 2 || d == 3) && monday)))
            || is_easter_holiday(date)
            || early_may
            || spring
            || (m == 8 && monday && d >= 25)
            || (m == 12 && (d == 25 || d == 26))
            || (m == 12 && (d == 27 || d == 28) && matches!(w, Weekday::Monday | Weekday::Tuesday))
            || matches!((y, m, d), (2011, 4, 29) | (2022, 9, 19) | (2023, 5, 8));
        !holiday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn bank_holidays_2023() {
        let cal = UnitedKingdomSettlement;
        for (m, d) in [(1, 2), (4, 7), (4, 10), (5, 1), (5, 8), (5, 29), (8, 28), (12, 25), (12, 26)] {
            assert!(!cal.is_business_day(date(2023, m, d)), "2023-{m:02}-{d:02}");
        }
    }

    #[test]
    fn early_may_moved_only_in_2020() {
        let cal = UnitedKingdomSettlement;
        assert!(!cal.is_business_day(date(2020, 5, 8)));
        assert!(cal.is_business_day(date(2020, 5, 4)));
        assert!(!cal.is_business_day(date(2024, 5, 6)));
    }

    #[test]
    fn boxing_day_substitute() {
        // 2021-12-25 Saturday, 12-26 Sunday: substitutes Monday 27 and Tuesday 28
        let cal = UnitedKingdomSettlement;
        assert!(!cal.is_business_day(date(2021, 12, 27)));
        assert!(!cal.is_business_day(date(2021, 12, 28)));
        assert!(cal.is_business_day(date(2021, 12, 29)));
    }
}
