//! `PiecewiseYieldCurve`: a bootstrapped [`InterpolatedCurve`] together with
//! the helpers it was calibrated to.

use std::sync::Arc;

use yc_core::{DiscountFactor, Rate, Real, Result, Time};
use yc_termstructures::{InterpolatedCurve, Interpolation, TermStructure, YieldTermStructure};
use yc_time::{Date, DayCounter};

use crate::bootstrap::{BootstrapConfig, Bootstrapper};
use crate::rate_helpers::RateHelper;

/// A yield curve whose pillar values reprice a set of market quotes.
///
/// Queries delegate to the underlying [`InterpolatedCurve`]; the helpers
/// are kept sorted by pillar date so that `helpers()[i]` calibrates pillar
/// `i + 1` of [`nodes`](Self::nodes).
#[derive(Debug, Clone)]
pub struct PiecewiseYieldCurve {
    curve: InterpolatedCurve,
    helpers: Vec<RateHelper>,
    sweeps: usize,
}

impl PiecewiseYieldCurve {
    /// Bootstrap with the default [`BootstrapConfig`].
    pub fn new(
        reference_date: Date,
        helpers: Vec<RateHelper>,
        day_counter: Arc<dyn DayCounter>,
        interpolation: Interpolation,
    ) -> Result<Self> {
        Self::with_config(
            reference_date,
            helpers,
            day_counter,
            interpolation,
            BootstrapConfig::default(),
        )
    }

    /// Bootstrap with explicit solver and sweep settings.
    pub fn with_config(
        reference_date: Date,
        helpers: Vec<RateHelper>,
        day_counter: Arc<dyn DayCounter>,
        interpolation: Interpolation,
        config: BootstrapConfig,
    ) -> Result<Self> {
        Bootstrapper::new(config).bootstrap(reference_date, helpers, day_counter, interpolation)
    }

    pub(crate) fn from_parts(curve: InterpolatedCurve, helpers: Vec<RateHelper>, sweeps: usize) -> Self {
        Self { curve, helpers, sweeps }
    }

    /// The calibration helpers, sorted by pillar date.
    pub fn helpers(&self) -> &[RateHelper] {
        &self.helpers
    }

    /// `(date, value)` for the reference node and every pillar, in the
    /// strategy's value space.
    pub fn nodes(&self) -> Vec<(Date, Real)> {
        self.curve.nodes()
    }

    /// Node dates, starting with the reference date.
    pub fn dates(&self) -> &[Date] {
        self.curve.dates()
    }

    /// Node times, starting with 0.
    pub fn times(&self) -> &[Time] {
        self.curve.times()
    }

    /// Node values, starting with the reference value.
    pub fn values(&self) -> &[Real] {
        self.curve.values()
    }

    /// The interpolation strategy.
    pub fn interpolation(&self) -> Interpolation {
        self.curve.interpolation()
    }

    /// Gauss-Seidel sweeps used; 0 for local strategies.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// The underlying interpolated curve.
    pub fn curve(&self) -> &InterpolatedCurve {
        &self.curve
    }

    /// Allow queries beyond the last pillar.
    pub fn enable_extrapolation(&self) {
        self.curve.enable_extrapolation();
    }

    /// Reject queries beyond the last pillar.
    pub fn disable_extrapolation(&self) {
        self.curve.disable_extrapolation();
    }
}

impl TermStructure for PiecewiseYieldCurve {
    fn reference_date(&self) -> Date {
        self.curve.reference_date()
    }

    fn day_counter(&self) -> &dyn DayCounter {
        self.curve.day_counter()
    }

    fn max_date(&self) -> Date {
        self.curve.max_date()
    }

    fn allows_extrapolation(&self) -> bool {
        self.curve.allows_extrapolation()
    }
}

impl YieldTermStructure for PiecewiseYieldCurve {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        self.curve.discount_impl(t)
    }

    fn forward_rate_impl(&self, t: Time) -> Rate {
        self.curve.forward_rate_impl(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_helpers::DepositRateHelper;
    use yc_time::Actual360;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn helpers_are_sorted_by_pillar() {
        let today = date(2025, 1, 2);
        let dc: Arc<dyn DayCounter> = Arc::new(Actual360);
        let helpers: Vec<RateHelper> = vec![
            DepositRateHelper::new(0.03, today, date(2025, 7, 2), Arc::clone(&dc), today)
                .unwrap()
                .into(),
            DepositRateHelper::new(0.02, today, date(2025, 2, 3), Arc::clone(&dc), today)
                .unwrap()
                .into(),
        ];
        let curve = PiecewiseYieldCurve::new(today, helpers, dc, Interpolation::LogLinearDiscount).unwrap();
        assert_eq!(curve.helpers()[0].pillar_date(), date(2025, 2, 3));
        assert_eq!(curve.dates(), &[today, date(2025, 2, 3), date(2025, 7, 2)]);
        assert_eq!(curve.values()[0], 1.0);
        assert_eq!(curve.sweeps(), 0);
        assert_eq!(curve.max_date(), date(2025, 7, 2));
    }
}
