//! Integration tests for calendars, period advancing and schedules.

use yc_time::{
    BusinessDayConvention, Calendar, CalendarKind, Date, DateGeneration, Frequency, Period, ScheduleBuilder, Target,
    TimeUnit, UnitedKingdomSettlement, UnitedStatesSettlement,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_target_holidays_2024() {
    let cal = Target;
    let expected = [date(2024, 1, 1), date(2024, 3, 29), date(2024, 4, 1), date(2024, 5, 1), date(2024, 12, 25), date(2024, 12, 26)];
    let mut holidays = Vec::new();
    let mut d = date(2024, 1, 1);
    while d <= date(2024, 12, 31) {
        if !d.weekday().is_weekend() && !cal.is_business_day(d) {
            holidays.push(d);
        }
        d = d.add_days(1).unwrap();
    }
    assert_eq!(holidays, expected);
}

#[test]
fn test_spot_dates() {
    // Good Friday 2024-03-29 and Easter Monday 2024-04-01 are TARGET holidays.
    let cal = Target;
    assert_eq!(cal.advance_business_days(date(2024, 3, 27), 2).unwrap(), date(2024, 4, 2));
    // US: Juneteenth 2024-06-19 is a Wednesday.
    let us = UnitedStatesSettlement;
    assert_eq!(us.advance_business_days(date(2024, 6, 17), 2).unwrap(), date(2024, 6, 20));
    // UK: Late summer bank holiday 2024-08-26.
    let uk = UnitedKingdomSettlement;
    assert_eq!(uk.advance_business_days(date(2024, 8, 23), 1).unwrap(), date(2024, 8, 27));
}

#[test]
fn test_advance_by_tenor_modified_following() {
    let cal = Target;
    // 2024-03-28 + 1M = 2024-04-28 (Sunday) -> Monday 2024-04-29
    let one_month = cal
        .advance(date(2024, 3, 28), "1M".parse().unwrap(), BusinessDayConvention::ModifiedFollowing, false)
        .unwrap();
    assert_eq!(one_month, date(2024, 4, 29));
    // 2024-05-31 + 1M = 2024-06-30 (Sunday): Modified Following stays in June
    let month_end = cal
        .advance(date(2024, 5, 31), Period::new(1, TimeUnit::Months), BusinessDayConvention::ModifiedFollowing, false)
        .unwrap();
    assert_eq!(month_end, date(2024, 6, 28));
}

#[test]
fn test_calendar_kind_builds() {
    for (kind, name) in [
        (CalendarKind::Target, "TARGET"),
        (CalendarKind::UnitedStates, "US (Settlement)"),
        (CalendarKind::UnitedKingdom, "UK (Settlement)"),
    ] {
        assert_eq!(kind.build().name(), name);
    }
}

#[test]
fn test_quarterly_schedule_over_target() {
    let cal = Target;
    let tenor = Period::from_frequency(Frequency::Quarterly).unwrap();
    let sched = ScheduleBuilder::new(date(2024, 4, 2), date(2025, 4, 2), tenor, &cal)
        .with_rule(DateGeneration::Backward)
        .build()
        .unwrap();
    assert_eq!(
        sched.dates(),
        &[date(2024, 4, 2), date(2024, 7, 2), date(2024, 10, 2), date(2025, 1, 2), date(2025, 4, 2)]
    );
}
