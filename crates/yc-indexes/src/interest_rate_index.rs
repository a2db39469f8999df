//! `InterestRateIndex`: base for interest-rate indexes.

use std::sync::Arc;

use crate::index::{FixingStore, Index};
use yc_core::{ensure, Error, Rate, RelinkableHandle, Result};
use yc_termstructures::YieldTermStructure;
use yc_time::{BusinessDayConvention, Calendar, CalendarKind, Date, DayCounter, DayCounterKind, Period};

/// Market conventions of an interest-rate index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConventions {
    /// Index name.
    pub name: String,
    /// Tenor of the underlying deposit (1D for overnight indexes).
    pub tenor: Period,
    /// Business days between fixing and value date.
    pub fixing_days: u32,
    /// ISO currency code.
    pub currency: &'static str,
    /// Fixing and accrual calendar.
    pub calendar: CalendarKind,
    /// Adjustment of the maturity date.
    pub convention: BusinessDayConvention,
    /// Whether month-end value dates roll to month-end maturities.
    pub end_of_month: bool,
    /// Accrual day counter.
    pub day_counter: DayCounterKind,
}

/// An index whose fixings are rates on a deposit of fixed tenor.
pub trait InterestRateIndex: Index {
    /// The conventions the index was built from.
    fn conventions(&self) -> &IndexConventions;

    /// Shared calendar instance.
    fn calendar(&self) -> Arc<dyn Calendar>;

    /// Shared accrual day-counter instance.
    fn day_counter(&self) -> Arc<dyn DayCounter>;

    /// The curve used to forecast fixings; may be empty.
    fn forwarding_term_structure(&self) -> &RelinkableHandle<dyn YieldTermStructure>;

    /// Maturity date of the deposit starting on `value_date`.
    fn maturity_date(&self, value_date: Date) -> Result<Date>;

    /// The index tenor (e.g. 3M, 6M, 1D).
    fn tenor(&self) -> Period {
        self.conventions().tenor
    }

    /// Settlement days between fixing and value date.
    fn fixing_days(&self) -> u32 {
        self.conventions().fixing_days
    }

    /// ISO currency code.
    fn currency(&self) -> &'static str {
        self.conventions().currency
    }

    /// Business-day convention for the maturity date.
    fn business_day_convention(&self) -> BusinessDayConvention {
        self.conventions().convention
    }

    /// Whether this is an end-of-month index.
    fn end_of_month(&self) -> bool {
        self.conventions().end_of_month
    }

    /// Value date corresponding to a fixing date.
    fn value_date(&self, fixing_date: Date) -> Result<Date> {
        self.calendar()
            .advance_business_days(fixing_date, self.fixing_days() as i32)
    }

    /// Fixing date corresponding to a value date.
    fn fixing_date(&self, value_date: Date) -> Result<Date> {
        self.calendar()
            .advance_business_days(value_date, -(self.fixing_days() as i32))
    }

    /// Simple forward rate over the deposit fixed on `fixing_date`, read
    /// from the forwarding curve.
    ///
    /// # Errors
    /// [`Error::EmptyHandle`] if no forwarding curve is linked; range errors
    /// from the curve.
    fn forecast_fixing(&self, fixing_date: Date) -> Result<Rate> {
        let curve = self.forwarding_term_structure().current().ok_or_else(|| {
            Error::EmptyHandle(format!(
                "{}: no forwarding curve linked to forecast the {fixing_date} fixing",
                self.name()
            ))
        })?;
        let start = self.value_date(fixing_date)?;
        let end = self.maturity_date(start)?;
        let tau = self.day_counter().year_fraction(start, end);
        ensure!(tau > 0.0, "{}: empty accrual period {start} to {end}", self.name());
        Ok((curve.discount(start)? / curve.discount(end)? - 1.0) / tau)
    }
}

/// Common data bundle for the concrete index types.
#[derive(Debug, Clone)]
pub(crate) struct InterestRateIndexData {
    pub conventions: IndexConventions,
    pub calendar: Arc<dyn Calendar>,
    pub day_counter: Arc<dyn DayCounter>,
    pub fixings: FixingStore,
    pub forwarding: RelinkableHandle<dyn YieldTermStructure>,
}

impl InterestRateIndexData {
    pub fn new(conventions: IndexConventions, forwarding: RelinkableHandle<dyn YieldTermStructure>) -> Self {
        Self {
            calendar: conventions.calendar.build(),
            day_counter: conventions.day_counter.build(),
            conventions,
            fixings: FixingStore::new(),
            forwarding,
        }
    }

    /// Stored fixing unless forced, forecast otherwise.
    pub fn fixing<I: InterestRateIndex + ?Sized>(&self, index: &I, date: Date, force_forecast: bool) -> Result<Rate> {
        ensure!(
            index.is_valid_fixing_date(date),
            "{date} is not a valid fixing date for {}",
            self.conventions.name
        );
        if !force_forecast {
            if let Some(v) = self.fixings.get(date) {
                return Ok(v);
            }
        }
        index.forecast_fixing(date)
    }
}
