//! `FlatForward`: a yield term structure with a constant forward rate.

use std::sync::Arc;

use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use yc_core::{Compounding, DiscountFactor, Rate, Result, Time};
use yc_time::{Actual365Fixed, Date, DayCounter, Frequency, InterestRate};

/// A flat (constant) forward-rate yield term structure.
///
/// Discount factors are `P(t) = exp(-r t)` where `r` is the continuously
/// compounded equivalent of the supplied rate. Defined on every date from
/// the reference date onwards.
#[derive(Debug, Clone)]
pub struct FlatForward {
    reference_date: Date,
    day_counter: Arc<dyn DayCounter>,
    rate: Rate,
}

impl FlatForward {
    /// Create a flat-forward curve from a rate quoted under `compounding` and
    /// `frequency`.
    pub fn new(
        reference_date: Date,
        rate: Rate,
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Self> {
        let quoted = InterestRate::new(rate, Arc::new(Actual365Fixed), compounding, frequency);
        let continuous = quoted.compound_factor_time(1.0)?.ln();
        Ok(Self {
            reference_date,
            day_counter,
            rate: continuous,
        })
    }

    /// Create a flat-forward curve from a continuously-compounded rate.
    pub fn continuous(reference_date: Date, rate: Rate, day_counter: Arc<dyn DayCounter>) -> Self {
        Self {
            reference_date,
            day_counter,
            rate,
        }
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl TermStructure for FlatForward {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    fn max_date(&self) -> Date {
        Date::MAX
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }

    fn forward_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use yc_time::Actual360;

    fn ref_date() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    #[test]
    fn flat_forward_discount() {
        let curve = FlatForward::continuous(ref_date(), 0.05, Arc::new(Actual365Fixed));
        assert_eq!(curve.discount(ref_date()).unwrap(), 1.0);
        let d = Date::from_ymd(2026, 1, 2).unwrap();
        assert_abs_diff_eq!(curve.discount(d).unwrap(), (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn annual_rate_converted_to_continuous() {
        let curve = FlatForward::new(
            ref_date(),
            0.05,
            Arc::new(Actual365Fixed),
            Compounding::Compounded,
            Frequency::Annual,
        )
        .unwrap();
        assert_abs_diff_eq!(curve.rate(), 1.05_f64.ln(), epsilon = 1e-14);
    }

    #[test]
    fn zero_and_forward_rates_are_flat() {
        let curve = FlatForward::continuous(ref_date(), 0.04, Arc::new(Actual365Fixed));
        let d1 = Date::from_ymd(2027, 3, 15).unwrap();
        let d2 = Date::from_ymd(2030, 6, 17).unwrap();
        let dc: Arc<dyn DayCounter> = Arc::new(Actual365Fixed);
        let z = curve
            .zero_rate(d1, Arc::clone(&dc), Compounding::Continuous, Frequency::Annual)
            .unwrap();
        assert_abs_diff_eq!(z.rate(), 0.04, epsilon = 1e-12);
        let f = curve
            .forward_rate(d1, d2, Arc::clone(&dc), Compounding::Continuous, Frequency::Annual)
            .unwrap();
        assert_abs_diff_eq!(f.rate(), 0.04, epsilon = 1e-12);
        let z0 = curve
            .zero_rate(ref_date(), dc, Compounding::Continuous, Frequency::Annual)
            .unwrap();
        assert_abs_diff_eq!(z0.rate(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn zero_rate_under_other_day_counter() {
        let curve = FlatForward::continuous(ref_date(), 0.03, Arc::new(Actual365Fixed));
        let d = Date::from_ymd(2026, 1, 2).unwrap();
        let z = curve
            .zero_rate(d, Arc::new(Actual360), Compounding::Continuous, Frequency::Annual)
            .unwrap();
        assert_abs_diff_eq!(z.rate(), 0.03 * 360.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn dates_before_reference_are_out_of_range() {
        let curve = FlatForward::continuous(ref_date(), 0.03, Arc::new(Actual365Fixed));
        let d = Date::from_ymd(2024, 12, 31).unwrap();
        assert!(curve.discount(d).unwrap_err().is_out_of_range());
    }
}
