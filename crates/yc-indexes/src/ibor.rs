//! Concrete IBOR index factory functions.

use crate::ibor_index::IborIndex;
use crate::interest_rate_index::IndexConventions;
use yc_core::{ensure_config, RelinkableHandle, Result};
use yc_termstructures::YieldTermStructure;
use yc_time::{BusinessDayConvention, CalendarKind, DayCounterKind, Period, TimeUnit};

/// Create a Euribor index with the given tenor.
///
/// - Currency: EUR
/// - Calendar: TARGET
/// - Day counter: Actual/360
/// - Fixing days: 2
/// - Convention: Modified Following
/// - End of month: true
pub fn euribor(tenor: Period, forwarding: RelinkableHandle<dyn YieldTermStructure>) -> IborIndex {
    IborIndex::new(
        IndexConventions {
            name: format!("EUR-Euribor-{tenor}"),
            tenor,
            fixing_days: 2,
            currency: "EUR",
            calendar: CalendarKind::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
            end_of_month: true,
            day_counter: DayCounterKind::Actual360,
        },
        forwarding,
    )
}

/// Create a STIBOR index. Only the quoted tenors 1W, 1M, 2M, 3M and 6M are
/// available.
///
/// - Currency: SEK
/// - Calendar: TARGET
/// - Day counter: Actual/360
/// - Fixing days: 0
/// - Convention: Modified Following
/// - End of month: false
pub fn stibor(tenor: Period, forwarding: RelinkableHandle<dyn YieldTermStructure>) -> Result<IborIndex> {
    ensure_config!(
        matches!(
            (tenor.length, tenor.unit),
            (1, TimeUnit::Weeks) | (1 | 2 | 3 | 6, TimeUnit::Months)
        ),
        "STIBOR is not quoted for tenor {tenor}"
    );
    Ok(IborIndex::new(
        IndexConventions {
            name: format!("STIBOR{tenor}"),
            tenor,
            fixing_days: 0,
            currency: "SEK",
            calendar: CalendarKind::Target,
            convention: BusinessDayConvention::ModifiedFollowing,
            end_of_month: false,
            day_counter: DayCounterKind::Actual360,
        },
        forwarding,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::interest_rate_index::InterestRateIndex;
    use yc_time::Date;

    #[test]
    fn euribor_conventions() {
        let idx = euribor(Period::new(6, TimeUnit::Months), RelinkableHandle::empty());
        assert_eq!(idx.name(), "EUR-Euribor-6M");
        assert_eq!(idx.fixing_days(), 2);
        assert!(idx.end_of_month());
        // month-end value date rolls to month-end maturity
        let vd = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(idx.maturity_date(vd).unwrap(), Date::from_ymd(2024, 8, 30).unwrap());
    }

    #[test]
    fn stibor_tenors() {
        let idx = stibor(Period::new(3, TimeUnit::Months), RelinkableHandle::empty()).unwrap();
        assert_eq!(idx.name(), "STIBOR3M");
        assert_eq!(idx.fixing_days(), 0);
        assert_eq!(idx.currency(), "SEK");
        assert!(!idx.end_of_month());
        assert!(stibor(Period::new(9, TimeUnit::Months), RelinkableHandle::empty())
            .unwrap_err()
            .is_configuration());
    }
}
