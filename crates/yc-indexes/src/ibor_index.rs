//! `IborIndex`: interbank offered-rate index.

use std::sync::Arc;

use crate::index::{FixingStore, Index};
use crate::interest_rate_index::{IndexConventions, InterestRateIndex, InterestRateIndexData};
use yc_core::{Real, RelinkableHandle, Result};
use yc_termstructures::YieldTermStructure;
use yc_time::{Calendar, Date, DayCounter};

/// An Interbank Offered Rate index (e.g. Euribor, STIBOR).
#[derive(Debug, Clone)]
pub struct IborIndex {
    pub(crate) data: InterestRateIndexData,
}

impl IborIndex {
    /// Create a new IBOR index forecasting from `forwarding`.
    pub fn new(conventions: IndexConventions, forwarding: RelinkableHandle<dyn YieldTermStructure>) -> Self {
        Self {
            data: InterestRateIndexData::new(conventions, forwarding),
        }
    }

    /// The same index forecasting from another curve. Fixings are shared.
    pub fn with_forwarding(&self, forwarding: RelinkableHandle<dyn YieldTermStructure>) -> Self {
        let mut data = self.data.clone();
        data.forwarding = forwarding;
        Self { data }
    }
}

impl Index for IborIndex {
    fn name(&self) -> &str {
        &self.data.conventions.name
    }

    fn fixing_calendar(&self) -> &dyn Calendar {
        &*self.data.calendar
    }

    fn fixing(&self, date: Date, force_forecast: bool) -> Result<Real> {
        self.data.fixing(self, date, force_forecast)
    }

    fn fixing_store(&self) -> &FixingStore {
        &self.data.fixings
    }
}

impl InterestRateIndex for IborIndex {
    fn conventions(&self) -> &IndexConventions {
        &self.data.conventions
    }

    fn calendar(&self) -> Arc<dyn Calendar> {
        Arc::clone(&self.data.calendar)
    }

    fn day_counter(&self) -> Arc<dyn DayCounter> {
        Arc::clone(&self.data.day_counter)
    }

    fn forwarding_term_structure(&self) -> &RelinkableHandle<dyn YieldTermStructure> {
        &self.data.forwarding
    }

    fn maturity_date(&self, value_date: Date) -> Result<Date> {
        self.data.calendar.advance(
            value_date,
            self.tenor(),
            self.business_day_convention(),
            self.end_of_month(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use yc_termstructures::FlatForward;
    use yc_time::{Actual360, BusinessDayConvention, CalendarKind, DayCounterKind, Period, TimeUnit};

    fn make_test_ibor(handle: RelinkableHandle<dyn YieldTermStructure>) -> IborIndex {
        IborIndex::new(
            IndexConventions {
                name: "TEST-IBOR-3M".into(),
                tenor: Period::new(3, TimeUnit::Months),
                fixing_days: 2,
                currency: "USD",
                calendar: CalendarKind::Null,
                convention: BusinessDayConvention::ModifiedFollowing,
                end_of_month: false,
                day_counter: DayCounterKind::Actual360,
            },
            handle,
        )
    }

    #[test]
    fn ibor_name_and_currency() {
        let idx = make_test_ibor(RelinkableHandle::empty());
        assert_eq!(idx.name(), "TEST-IBOR-3M");
        assert_eq!(idx.currency(), "USD");
    }

    #[test]
    fn ibor_value_and_maturity_dates() {
        let idx = make_test_ibor(RelinkableHandle::empty());
        let fix_date = Date::from_ymd(2025, 3, 17).unwrap();
        let vd = idx.value_date(fix_date).unwrap();
        assert_eq!(vd, Date::from_ymd(2025, 3, 19).unwrap());
        assert_eq!(idx.maturity_date(vd).unwrap(), Date::from_ymd(2025, 6, 19).unwrap());
        assert_eq!(idx.fixing_date(vd).unwrap(), fix_date);
    }

    #[test]
    fn stored_fixing_wins_unless_forced() {
        let handle = RelinkableHandle::<dyn YieldTermStructure>::empty();
        let idx = make_test_ibor(handle.clone());
        let d = Date::from_ymd(2025, 3, 17).unwrap();
        idx.add_fixing(d, 0.045);
        assert_eq!(idx.fixing(d, false).unwrap(), 0.045);
        assert!(matches!(idx.fixing(d, true), Err(yc_core::Error::EmptyHandle(_))));

        handle.link_to(Arc::new(FlatForward::continuous(d, 0.03, Arc::new(Actual360))));
        let start = Date::from_ymd(2025, 3, 19).unwrap();
        let end = Date::from_ymd(2025, 6, 19).unwrap();
        let tau = (end - start) as f64 / 360.0;
        let expected = ((0.03 * tau).exp() - 1.0) / tau;
        assert_abs_diff_eq!(idx.fixing(d, true).unwrap(), expected, epsilon = 1e-14);
    }

    #[test]
    fn with_forwarding_shares_fixings() {
        let idx = make_test_ibor(RelinkableHandle::empty());
        let other = idx.with_forwarding(RelinkableHandle::empty());
        let d = Date::from_ymd(2025, 3, 17).unwrap();
        other.add_fixing(d, 0.01);
        assert_eq!(idx.fixing(d, false).unwrap(), 0.01);
        assert!(!idx.forwarding_term_structure().same_slot(other.forwarding_term_structure()));
    }
}
