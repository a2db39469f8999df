//! `YieldTermStructure`: yield / interest-rate term structures.
//!
//! Implementors provide the discount factor as a function of curve time;
//! dated queries, zero rates and forward rates are derived from it. Every
//! dated query is range-checked first, so a failed query leaves the curve
//! untouched and usable.

use std::sync::Arc;

use crate::term_structure::TermStructure;
use yc_core::{ensure, Compounding, DiscountFactor, Rate, Real, Result, Time};
use yc_time::{Date, DayCounter, Frequency, InterestRate};

/// Time step used for limits at `t → 0⁺` and instantaneous forwards.
pub const DT: Real = 1.0e-4;

/// A yield (interest-rate) term structure.
pub trait YieldTermStructure: TermStructure {
    // ── Low-level impl hooks ─────────────────────────────────────────────

    /// Discount factor at curve time `t`, without range checks.
    fn discount_impl(&self, t: Time) -> DiscountFactor;

    /// Instantaneous continuously-compounded forward rate at curve time `t`.
    ///
    /// Default: central difference of `ln P`.
    fn forward_rate_impl(&self, t: Time) -> Rate {
        let t1 = (t - DT / 2.0).max(0.0);
        let t2 = t1 + DT;
        (self.discount_impl(t1).ln() - self.discount_impl(t2).ln()) / DT
    }

    // ── Public interface ─────────────────────────────────────────────────

    /// Discount factor for a date.
    fn discount(&self, date: Date) -> Result<DiscountFactor> {
        self.check_range(date)?;
        Ok(self.discount_impl(self.time_from_reference(date)))
    }

    /// Discount factors for a batch of dates, in input order.
    ///
    /// Fails on the first date that cannot be queried.
    fn discounts(&self, dates: &[Date]) -> Result<Vec<DiscountFactor>> {
        dates.iter().map(|&d| self.discount(d)).collect()
    }

    /// Zero rate between the reference date and `date`, expressed under the
    /// given day counter, compounding and frequency.
    ///
    /// At the reference date the `t → 0⁺` limit is returned.
    fn zero_rate(
        &self,
        date: Date,
        dc: Arc<dyn DayCounter>,
        comp: Compounding,
        freq: Frequency,
    ) -> Result<InterestRate> {
        self.check_range(date)?;
        let t = dc.year_fraction(self.reference_date(), date);
        if date == self.reference_date() || t == 0.0 {
            let compound = 1.0 / self.discount_impl(DT);
            return InterestRate::implied_rate_time(compound, dc, comp, freq, DT);
        }
        let compound = 1.0 / self.discount_impl(self.time_from_reference(date));
        InterestRate::implied_rate_time(compound, dc, comp, freq, t)
    }

    /// Zero rates for a batch of dates, in input order.
    fn zero_rates(
        &self,
        dates: &[Date],
        dc: Arc<dyn DayCounter>,
        comp: Compounding,
        freq: Frequency,
    ) -> Result<Vec<Rate>> {
        dates
            .iter()
            .map(|&d| Ok(self.zero_rate(d, Arc::clone(&dc), comp, freq)?.rate()))
            .collect()
    }

    /// Forward rate between two dates, expressed under the given conventions.
    ///
    /// With `d1 == d2` the instantaneous forward is returned.
    fn forward_rate(
        &self,
        d1: Date,
        d2: Date,
        dc: Arc<dyn DayCounter>,
        comp: Compounding,
        freq: Frequency,
    ) -> Result<InterestRate> {
        ensure!(d1 <= d2, "forward start {d1} is after its end {d2}");
        self.check_range(d1)?;
        self.check_range(d2)?;
        let t1 = self.time_from_reference(d1);
        if d1 == d2 {
            let compound = (self.forward_rate_impl(t1) * DT).exp();
            return InterestRate::implied_rate_time(compound, dc, comp, freq, DT);
        }
        let compound = self.discount_impl(t1) / self.discount_impl(self.time_from_reference(d2));
        let t = dc.year_fraction(d1, d2);
        InterestRate::implied_rate_time(compound, dc, comp, freq, t)
    }
}
