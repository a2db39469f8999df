//! `OvernightIndex`: overnight rate index.

use std::sync::Arc;

use crate::index::{FixingStore, Index};
use crate::interest_rate_index::{IndexConventions, InterestRateIndex, InterestRateIndexData};
use yc_core::{ensure, Real, RelinkableHandle, Result};
use yc_termstructures::YieldTermStructure;
use yc_time::{BusinessDayConvention, Calendar, CalendarKind, Date, DayCounter, DayCounterKind, Period, TimeUnit};

/// An overnight rate index (e.g. SOFR, ESTR, SONIA).
///
/// The tenor is one business day; the deposit matures on the business day
/// following its value date.
#[derive(Debug, Clone)]
pub struct OvernightIndex {
    pub(crate) data: InterestRateIndexData,
}

impl OvernightIndex {
    /// Create a new overnight index forecasting from `forwarding`.
    pub fn new(
        name: impl Into<String>,
        fixing_days: u32,
        currency: &'static str,
        calendar: CalendarKind,
        day_counter: DayCounterKind,
        forwarding: RelinkableHandle<dyn YieldTermStructure>,
    ) -> Self {
        let conventions = IndexConventions {
            name: name.into(),
            tenor: Period::new(1, TimeUnit::Days),
            fixing_days,
            currency,
            calendar,
            convention: BusinessDayConvention::Following,
            end_of_month: false,
            day_counter,
        };
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

    /// Annualised compounded rate over `[start, end]` from daily forecasts,
    /// `(P(start)/P(end) - 1) / τ(start, end)`.
    pub fn compounded_forecast(&self, start: Date, end: Date) -> Result<Real> {
        ensure!(start < end, "{}: compounding period {start} to {end} is empty", self.name());
        let curve = self.forwarding_term_structure().current().ok_or_else(|| {
            yc_core::Error::EmptyHandle(format!("{}: no forwarding curve linked", self.name()))
        })?;
        let tau = self.data.day_counter.year_fraction(start, end);
        Ok((curve.discount(start)? / curve.discount(end)? - 1.0) / tau)
    }
}

impl Index for OvernightIndex {
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

impl InterestRateIndex for OvernightIndex {
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
        self.data.calendar.advance_business_days(value_date, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use yc_termstructures::FlatForward;
    use yc_time::Actual360;

    fn make_test_on(handle: RelinkableHandle<dyn YieldTermStructure>) -> OvernightIndex {
        OvernightIndex::new("TEST-ON", 0, "USD", CalendarKind::WeekendsOnly, DayCounterKind::Actual360, handle)
    }

    #[test]
    fn overnight_name_and_tenor() {
        let idx = make_test_on(RelinkableHandle::empty());
        assert_eq!(idx.name(), "TEST-ON");
        assert_eq!(idx.tenor(), Period::new(1, TimeUnit::Days));
    }

    #[test]
    fn overnight_maturity_skips_weekend() {
        let idx = make_test_on(RelinkableHandle::empty());
        let friday = Date::from_ymd(2025, 6, 13).unwrap();
        assert_eq!(idx.value_date(friday).unwrap(), friday);
        assert_eq!(idx.maturity_date(friday).unwrap(), Date::from_ymd(2025, 6, 16).unwrap());
    }

    #[test]
    fn weekend_is_not_a_fixing_date() {
        let idx = make_test_on(RelinkableHandle::empty());
        let saturday = Date::from_ymd(2025, 6, 14).unwrap();
        assert!(idx.fixing(saturday, false).is_err());
    }

    #[test]
    fn forecast_from_linked_curve() {
        let handle = RelinkableHandle::<dyn YieldTermStructure>::empty();
        let idx = make_test_on(handle.clone());
        let d = Date::from_ymd(2025, 6, 10).unwrap();
        assert!(idx.forecast_fixing(d).is_err());
        handle.link_to(Arc::new(FlatForward::continuous(d, 0.05, Arc::new(Actual360))));
        let expected = ((0.05_f64 / 360.0).exp() - 1.0) * 360.0;
        assert_abs_diff_eq!(idx.fixing(d, false).unwrap(), expected, epsilon = 1e-12);

        let end = Date::from_ymd(2025, 12, 10).unwrap();
        let tau = (end - d) as f64 / 360.0;
        let compounded = idx.compounded_forecast(d, end).unwrap();
        assert_abs_diff_eq!(compounded, ((0.05 * tau).exp() - 1.0) / tau, epsilon = 1e-12);
    }
}
