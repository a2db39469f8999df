//! Interest rate with compounding and day-counting conventions.
//!
//! An `InterestRate` bundles a rate value with a `DayCounter`, a
//! `Compounding` convention, and a `Frequency`.  It can compute compound
//! factors, discount factors, equivalent rates, and implied rates.

use std::sync::Arc;

use crate::date::Date;
use crate::day_counter::DayCounter;
use crate::frequency::Frequency;
use yc_core::errors::{Error, Result};
use yc_core::{Compounding, Real, Time};

/// An interest rate with associated compounding and day-counting conventions.
#[derive(Debug, Clone)]
pub struct InterestRate {
    rate: Real,
    dc: Arc<dyn DayCounter>,
    compounding: Compounding,
    frequency: Frequency,
}

impl InterestRate {
    /// Create a new interest rate.
    ///
    /// `frequency` is ignored for simple and continuous compounding.
    pub fn new(
        rate: Real,
        dc: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Self {
        Self {
            rate,
            dc,
            compounding,
            frequency,
        }
    }

    /// The rate value.
    pub fn rate(&self) -> Real {
        self.rate
    }

    /// The day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.dc
    }

    /// The compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// The compounding frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Compound factor over `t` years.
    ///
    /// # Errors
    /// Negative `t`, or a non-positive simple factor `1 + r·t`.
    pub fn compound_factor_time(&self, t: Time) -> Result<Real> {
        if t < 0.0 {
            return Err(Error::InvalidArgument(format!("negative time {t} not allowed")));
        }
        if t == 0.0 {
            return Ok(1.0);
        }
        let r = self.rate;
        let f = freq_value(self.frequency);
        let factor = match self.compounding {
            Compounding::Simple => 1.0 + r * t,
            Compounding::Compounded => (1.0 + r / f).powf(f * t),
            Compounding::Continuous => (r * t).exp(),
            Compounding::SimpleThenCompounded => {
                if t <= 1.0 / f {
                    1.0 + r * t
                } else {
                    (1.0 + r / f).powf(f * t)
                }
            }
            Compounding::CompoundedThenSimple => {
                if t <= 1.0 / f {
                    (1.0 + r / f).powf(f * t)
                } else {
                    let periods = (f * t).floor();
                    let stub = t - periods / f;
                    (1.0 + r / f).powf(periods) * (1.0 + r * stub)
                }
            }
        };
        if factor <= 0.0 || !factor.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "compound factor {factor} for rate {r} over {t}y is not positive"
            )));
        }
        Ok(factor)
    }

    /// Compound factor between two dates under this rate's day counter.
    pub fn compound_factor(&self, d1: Date, d2: Date) -> Result<Real> {
        self.compound_factor_time(self.dc.year_fraction(d1, d2))
    }

    /// Discount factor over `t` years: `1 / compound_factor`.
    pub fn discount_factor_time(&self, t: Time) -> Result<Real> {
        Ok(1.0 / self.compound_factor_time(t)?)
    }

    /// Discount factor between two dates.
    pub fn discount_factor(&self, d1: Date, d2: Date) -> Result<Real> {
        Ok(1.0 / self.compound_factor(d1, d2)?)
    }

    /// The rate with `comp`/`freq` conventions giving the same compound
    /// factor over `t` years.
    pub fn equivalent_rate_time(&self, comp: Compounding, freq: Frequency, t: Time) -> Result<InterestRate> {
        Self::implied_rate_time(self.compound_factor_time(t)?, Arc::clone(&self.dc), comp, freq, t)
    }

    /// The rate implied by a compound factor observed over `t` years.
    ///
    /// `t` must be strictly positive.
    pub fn implied_rate_time(
        compound: Real,
        dc: Arc<dyn DayCounter>,
        comp: Compounding,
        freq: Frequency,
        t: Time,
    ) -> Result<InterestRate> {
        if !(compound > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "compound factor {compound} must be positive"
            )));
        }
        if !(t > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "implied rate needs a positive time, got {t}"
            )));
        }
        let f = freq_value(freq);
        let compounded = || (compound.powf(1.0 / (f * t)) - 1.0) * f;
        let simple = || (compound - 1.0) / t;
        let r = match comp {
            Compounding::Simple => simple(),
            Compounding::Compounded => compounded(),
            Compounding::Continuous => compound.ln() / t,
            Compounding::SimpleThenCompounded => {
                if t <= 1.0 / f {
                    simple()
                } else {
                    compounded()
                }
            }
            Compounding::CompoundedThenSimple => {
                if t <= 1.0 / f {
                    compounded()
                } else {
                    simple()
                }
            }
        };
        Ok(InterestRate::new(r, dc, comp, freq))
    }

    /// The rate implied by a compound factor between two dates.
    pub fn implied_rate(
        compound: Real,
        dc: Arc<dyn DayCounter>,
        comp: Compounding,
        freq: Frequency,
        d1: Date,
        d2: Date,
    ) -> Result<InterestRate> {
        let t = dc.year_fraction(d1, d2);
        Self::implied_rate_time(compound, dc, comp, freq, t)
    }
}

fn freq_value(freq: Frequency) -> Real {
    match freq.periods_per_year() {
        0 => 1.0,
        n => n as Real,
    }
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4}% {} {} {}",
            self.rate * 100.0,
            self.dc.name(),
            self.compounding,
            self.frequency,
        )
    }
}
