//! Concrete calendars and a by-name selector.

mod target;
mod united_kingdom;
mod united_states;

pub use target::Target;
pub use united_kingdom::UnitedKingdomSettlement;
pub use united_states::UnitedStatesSettlement;

use std::str::FromStr;
use std::sync::Arc;

use crate::calendar::{Calendar, NullCalendar, WeekendsOnly};
use crate::date::Date;
use yc_core::errors::Error;

/// Calendars that can be chosen by name in a curve configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarKind {
    /// TARGET (euro settlement).
    Target,
    /// United States, settlement holidays.
    UnitedStates,
    /// United Kingdom, settlement holidays.
    UnitedKingdom,
    /// Weekends only.
    WeekendsOnly,
    /// Every day is a business day.
    Null,
}

impl CalendarKind {
    /// Instantiate the calendar.
    pub fn build(self) -> Arc<dyn Calendar> {
        match self {
            CalendarKind::Target => Arc::new(Target),
            CalendarKind::UnitedStates => Arc::new(UnitedStatesSettlement),
            CalendarKind::UnitedKingdom => Arc::new(UnitedKingdomSettlement),
            CalendarKind::WeekendsOnly => Arc::new(WeekendsOnly),
            CalendarKind::Null => Arc::new(NullCalendar),
        }
    }
}

impl FromStr for CalendarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "target" => Ok(CalendarKind::Target),
            "unitedstates" | "us" | "usa" => Ok(CalendarKind::UnitedStates),
            "unitedkingdom" | "uk" | "gb" => Ok(CalendarKind::UnitedKingdom),
            "weekendsonly" => Ok(CalendarKind::WeekendsOnly),
            "null" | "none" => Ok(CalendarKind::Null),
            _ => Err(Error::Configuration(format!("unknown calendar '{s}'"))),
        }
    }
}

/// Easter Sunday of `year` (anonymous Gregorian algorithm).
pub(crate) fn easter_sunday(year: u16) -> Option<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8).ok()
}

/// `true` if `date` is Good Friday or Easter Monday.
pub(crate) fn is_easter_holiday(date: Date) -> bool {
    easter_sunday(date.year()).is_some_and(|easter| {
        let offset = date - easter;
        offset == -2 || offset == 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easter_dates() {
        assert_eq!(easter_sunday(2023), Date::from_ymd(2023, 4, 9).ok());
        assert_eq!(easter_sunday(2024), Date::from_ymd(2024, 3, 31).ok());
        assert_eq!(easter_sunday(2025), Date::from_ymd(2025, 4, 20).ok());
    }

    #[test]
    fn calendar_names_parse() {
        assert_eq!("TARGET".parse::<CalendarKind>().unwrap(), CalendarKind::Target);
        assert_eq!("United States".parse::<CalendarKind>().unwrap(), CalendarKind::UnitedStates);
        assert!("Mars".parse::<CalendarKind>().unwrap_err().is_configuration());
    }
}
