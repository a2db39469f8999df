//! `InterpolatedCurve`: a yield curve defined by values at pillar dates.
//!
//! Node 0 is always the reference date. Its value is derived rather than
//! stored by the caller: 1.0 in discount space, the first pillar's value in
//! zero-rate and forward space. The node value is interpreted according to
//! the strategy's [`ValueSpace`]:
//!
//! | space          | `P(t)` inside the pillars       | beyond the last pillar          |
//! |----------------|---------------------------------|---------------------------------|
//! | zero rate      | `exp(-z(t)·t)`                  | flat terminal zero `z_n`        |
//! | discount       | `P(t)`                          | `P_n·exp(-f_n·(t - t_n))`       |
//! | forward        | `exp(-∫₀ᵗ f)`                   | last forward continued          |
//!
//! where `f_n = -P'(t_n)/P(t_n)` is the left instantaneous forward at the
//! last pillar.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::interpolation::{Interpolant, Interpolation, ValueSpace};
use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use yc_core::{ensure, ensure_config, DiscountFactor, Rate, Real, Result, Time};
use yc_math::Interpolation1D;
use yc_time::{Date, DayCounter};

/// A yield curve interpolated over `(date, value)` pillar nodes.
#[derive(Debug)]
pub struct InterpolatedCurve {
    reference_date: Date,
    day_counter: Arc<dyn DayCounter>,
    interpolation: Interpolation,
    dates: Vec<Date>,
    times: Vec<Time>,
    values: Vec<Real>,
    interpolant: Interpolant,
    extrapolate: AtomicBool,
}

impl InterpolatedCurve {
    /// Build a curve from pillar dates (reference date excluded) and their
    /// values in the strategy's value space.
    ///
    /// # Errors
    /// [`Error::Configuration`](yc_core::Error::Configuration) if there are
    /// no pillars, the lengths differ, a pillar is not strictly after its
    /// predecessor (the reference date included), or two pillars map to
    /// the same time under `day_counter`. Kernel errors (such as a
    /// non-positive discount factor) are returned as-is.
    pub fn new(
        reference_date: Date,
        pillar_dates: &[Date],
        pillar_values: &[Real],
        day_counter: Arc<dyn DayCounter>,
        interpolation: Interpolation,
    ) -> Result<Self> {
        ensure_config!(!pillar_dates.is_empty(), "a curve needs at least one pillar");
        ensure_config!(
            pillar_dates.len() == pillar_values.len(),
            "{} pillar dates but {} pillar values",
            pillar_dates.len(),
            pillar_values.len()
        );

        let mut dates = Vec::with_capacity(pillar_dates.len() + 1);
        dates.push(reference_date);
        dates.extend_from_slice(pillar_dates);
        for w in dates.windows(2) {
            ensure_config!(
                w[0] < w[1],
                "pillar dates must be strictly increasing from the reference date: {} is followed by {}",
                w[0],
                w[1]
            );
        }

        let times: Vec<Time> = dates
            .iter()
            .map(|&d| day_counter.year_fraction(reference_date, d))
            .collect();
        for (w, d) in times.windows(2).zip(&dates[1..]) {
            ensure_config!(
                w[0] < w[1],
                "pillar {d} does not increase curve time under {}",
                day_counter.name()
            );
        }

        let mut values = Vec::with_capacity(dates.len());
        values.push(reference_value(interpolation, pillar_values[0]));
        values.extend_from_slice(pillar_values);

        let interpolant = interpolation.build(&times, &values)?;
        Ok(Self {
            reference_date,
            day_counter,
            interpolation,
            dates,
            times,
            values,
            interpolant,
            extrapolate: AtomicBool::new(false),
        })
    }

    /// The same nodes joined by another strategy in the same value space.
    pub fn with_interpolation(&self, interpolation: Interpolation) -> Result<Self> {
        ensure!(
            interpolation.value_space() == self.interpolation.value_space(),
            "{interpolation} does not share the value space of {}",
            self.interpolation
        );
        let curve = Self::new(
            self.reference_date,
            &self.dates[1..],
            &self.values[1..],
            Arc::clone(&self.day_counter),
            interpolation,
        )?;
        curve.extrapolate.store(self.allows_extrapolation(), Ordering::Relaxed);
        Ok(curve)
    }

    // ── Mutation (bootstrapping) ─────────────────────────────────────────

    /// Replace the value at `node` (1-based pillar index) and rebuild the
    /// interpolant. On error the previous value is kept.
    pub fn set_value(&mut self, node: usize, value: Real) -> Result<()> {
        ensure!(
            node >= 1 && node < self.values.len(),
            "node {node} is not a pillar (curve has {} pillars)",
            self.values.len() - 1
        );
        let previous = (self.values[0], self.values[node]);
        self.values[node] = value;
        if node == 1 {
            self.values[0] = reference_value(self.interpolation, value);
        }
        match self.interpolation.build(&self.times, &self.values) {
            Ok(interpolant) => {
                self.interpolant = interpolant;
                Ok(())
            }
            Err(e) => {
                self.values[0] = previous.0;
                self.values[node] = previous.1;
                Err(e)
            }
        }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// The interpolation strategy.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Node dates, starting with the reference date.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Pillar dates (reference date excluded).
    pub fn pillar_dates(&self) -> &[Date] {
        &self.dates[1..]
    }

    /// Node times under the curve day counter, starting with 0.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Node values in the strategy's value space, starting with the
    /// derived reference value.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// `(date, value)` pairs for every node.
    pub fn nodes(&self) -> Vec<(Date, Real)> {
        self.dates.iter().copied().zip(self.values.iter().copied()).collect()
    }

    /// Number of pillars (reference node excluded).
    pub fn pillar_count(&self) -> usize {
        self.dates.len() - 1
    }

    /// Allow queries beyond the last pillar.
    pub fn enable_extrapolation(&self) {
        self.extrapolate.store(true, Ordering::Relaxed);
    }

    /// Reject queries beyond the last pillar.
    pub fn disable_extrapolation(&self) {
        self.extrapolate.store(false, Ordering::Relaxed);
    }

    fn last_time(&self) -> Time {
        self.times[self.times.len() - 1]
    }

    fn last_value(&self) -> Real {
        self.values[self.values.len() - 1]
    }

    // Left instantaneous forward at the last pillar, discount space only.
    fn terminal_forward(&self) -> Rate {
        let t_n = self.last_time();
        -self.interpolant.kernel().derivative(t_n) / self.last_value()
    }
}

fn reference_value(interpolation: Interpolation, first_pillar: Real) -> Real {
    match interpolation.value_space() {
        ValueSpace::DiscountFactor => 1.0,
        ValueSpace::ZeroRate | ValueSpace::ForwardRate => first_pillar,
    }
}

impl Clone for InterpolatedCurve {
    fn clone(&self) -> Self {
        Self {
            reference_date: self.reference_date,
            day_counter: Arc::clone(&self.day_counter),
            interpolation: self.interpolation,
            dates: self.dates.clone(),
            times: self.times.clone(),
            values: self.values.clone(),
            interpolant: self.interpolant.clone(),
            extrapolate: AtomicBool::new(self.allows_extrapolation()),
        }
    }
}

impl TermStructure for InterpolatedCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    fn max_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolate.load(Ordering::Relaxed)
    }
}

impl YieldTermStructure for InterpolatedCurve {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t <= 0.0 {
            return 1.0;
        }
        let t_n = self.last_time();
        match &self.interpolant {
            Interpolant::Linear(_) | Interpolant::Cubic(_) => {
                let z = if t > t_n {
                    self.last_value()
                } else {
                    self.interpolant.kernel().operator(t)
                };
                (-z * t).exp()
            }
            Interpolant::LogLinear(_) | Interpolant::LogCubic(_) => {
                if t > t_n {
                    self.last_value() * (-self.terminal_forward() * (t - t_n)).exp()
                } else {
                    self.interpolant.kernel().operator(t)
                }
            }
            Interpolant::BackwardFlat(forwards) => (-forwards.primitive(t)).exp(),
        }
    }

    fn forward_rate_impl(&self, t: Time) -> Rate {
        let t_n = self.last_time();
        let kernel = self.interpolant.kernel();
        match &self.interpolant {
            Interpolant::Linear(_) | Interpolant::Cubic(_) => {
                if t > t_n {
                    self.last_value()
                } else {
                    kernel.operator(t) + t * kernel.derivative(t)
                }
            }
            Interpolant::LogLinear(_) | Interpolant::LogCubic(_) => {
                if t > t_n {
                    self.terminal_forward()
                } else {
                    -kernel.derivative(t) / kernel.operator(t)
                }
            }
            Interpolant::BackwardFlat(forwards) => forwards.operator(t),
        }
    }
}
