//! Iterative bootstrap of an [`InterpolatedCurve`] from rate helpers.
//!
//! Local strategies are solved pillar by pillar: the value at pillar `i`
//! only moves the curve on `(t_{i-1}, t_i]` and beyond, so once a helper
//! reprices it stays repriced. Global strategies (the cubic splines) are
//! seeded with the local solution in the same value space and then refined
//! by Gauss-Seidel sweeps until no pillar moves by more than
//! [`BootstrapConfig::sweep_tolerance`].

use std::sync::Arc;

use tracing::{debug, info};
use yc_core::{ensure_config, Error, Rate, Real, Result, Time};
use yc_math::{Brent, Root, SolveFailure};
use yc_termstructures::{InterpolatedCurve, Interpolation, ValueSpace};
use yc_time::{Date, DayCounter};

use crate::piecewise_yield_curve::PiecewiseYieldCurve;
use crate::rate_helpers::RateHelper;

/// Lower end of the zero/forward rate search domain.
pub const MIN_RATE: Rate = -1.0;

/// Upper end of the zero/forward rate search domain.
pub const MAX_RATE: Rate = 3.0;

/// Solver and sweep settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BootstrapConfig {
    /// Absolute accuracy on the value and on the residual `implied - quote`.
    pub accuracy: Real,
    /// Objective evaluations allowed per pillar solve.
    pub max_evaluations: usize,
    /// A global sweep converges when no pillar moves by this much.
    pub sweep_tolerance: Real,
    /// Global sweeps allowed before giving up.
    pub max_sweeps: usize,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            accuracy: 1.0e-12,
            max_evaluations: 100,
            sweep_tolerance: 1.0e-12,
            max_sweeps: 100,
        }
    }
}

impl BootstrapConfig {
    fn validate(&self) -> Result<()> {
        ensure_config!(
            self.accuracy > 0.0 && self.accuracy.is_finite(),
            "bootstrap accuracy must be positive, got {}",
            self.accuracy
        );
        ensure_config!(self.max_evaluations > 0, "max_evaluations must be positive");
        ensure_config!(
            self.sweep_tolerance > 0.0 && self.sweep_tolerance.is_finite(),
            "sweep tolerance must be positive, got {}",
            self.sweep_tolerance
        );
        ensure_config!(self.max_sweeps > 0, "max_sweeps must be positive");
        Ok(())
    }
}

/// Builds a [`PiecewiseYieldCurve`] so that every helper reprices its quote.
#[derive(Debug, Clone, Default)]
pub struct Bootstrapper {
    config: BootstrapConfig,
}

impl Bootstrapper {
    /// A bootstrapper with the given settings.
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    /// The solver and sweep settings.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Bootstrap a curve on `reference_date` from `helpers`.
    ///
    /// Helpers are sorted by pillar date (stable, so ties keep their input
    /// order and are then rejected). The returned curve has extrapolation
    /// disabled.
    ///
    /// # Errors
    /// - [`Error::Configuration`] for an empty helper list, two helpers
    ///   sharing a pillar date, a pillar not after `reference_date`, pillars
    ///   that coincide in time under `day_counter`, or invalid settings.
    /// - [`Error::Calibration`] when a pillar cannot be solved or the global
    ///   sweeps do not converge.
    pub fn bootstrap(
        &self,
        reference_date: Date,
        mut helpers: Vec<RateHelper>,
        day_counter: Arc<dyn DayCounter>,
        interpolation: Interpolation,
    ) -> Result<PiecewiseYieldCurve> {
        self.config.validate()?;
        ensure_config!(!helpers.is_empty(), "no rate helpers to bootstrap from");

        helpers.sort_by_key(RateHelper::pillar_date);
        for pair in helpers.windows(2) {
            ensure_config!(
                pair[0].pillar_date() != pair[1].pillar_date(),
                "{} and {} share the pillar date {}",
                pair[0].label(),
                pair[1].label(),
                pair[1].pillar_date()
            );
        }
        for helper in &helpers {
            ensure_config!(
                helper.pillar_date() > reference_date,
                "{}: pillar {} is not after the reference date {reference_date}",
                helper.label(),
                helper.pillar_date()
            );
        }

        let space = interpolation.value_space();
        let pillars: Vec<Date> = helpers.iter().map(RateHelper::pillar_date).collect();
        let seeds: Vec<Real> = helpers
            .iter()
            .map(|h| {
                let t = day_counter.year_fraction(reference_date, h.pillar_date());
                match space {
                    ValueSpace::DiscountFactor => (-h.quoted_rate() * t).exp(),
                    ValueSpace::ZeroRate | ValueSpace::ForwardRate => h.quoted_rate(),
                }
            })
            .collect();
        let mut curve = InterpolatedCurve::new(
            reference_date,
            &pillars,
            &seeds,
            day_counter,
            interpolation.local_counterpart(),
        )?;

        for (k, helper) in helpers.iter().enumerate() {
            let node = k + 1;
            let guess = local_guess(&curve, node, helper);
            self.solve_pillar(&mut curve, node, helper, guess)?;
        }

        let mut sweeps = 0;
        if interpolation.is_global() {
            curve = curve.with_interpolation(interpolation)?;
            sweeps = self.sweep(&mut curve, &helpers)?;
        }

        info!(
            pillars = helpers.len(),
            interpolation = %interpolation,
            sweeps,
            "curve bootstrapped"
        );
        Ok(PiecewiseYieldCurve::from_parts(curve, helpers, sweeps))
    }

    fn sweep(&self, curve: &mut InterpolatedCurve, helpers: &[RateHelper]) -> Result<usize> {
        for sweep in 1..=self.config.max_sweeps {
            let mut max_change: Real = 0.0;
            for (k, helper) in helpers.iter().enumerate() {
                let node = k + 1;
                let residual = helper.implied_rate(&*curve)? - helper.quoted_rate();
                if residual.abs() <= self.config.accuracy {
                    continue;
                }
                let previous = curve.values()[node];
                let root = self.solve_pillar(curve, node, helper, previous)?;
                max_change = max_change.max((root.x - previous).abs());
            }
            debug!(sweep, max_change, "global sweep");
            if max_change < self.config.sweep_tolerance {
                return Ok(sweep);
            }
        }

        let (worst, residual) = helpers
            .iter()
            .map(|h| {
                let r = h.implied_rate(&*curve).map_or(Real::NAN, |v| v - h.quoted_rate());
                (h, r)
            })
            .fold(None, |acc: Option<(&RateHelper, Real)>, (h, r)| match acc {
                Some((_, best)) if !(r.abs() > best.abs()) => acc,
                _ => Some((h, r)),
            })
            .unwrap_or((&helpers[0], Real::NAN));
        Err(Error::Calibration {
            helper: worst.label().to_string(),
            pillar: worst.pillar_date().to_string(),
            residual,
            reason: format!("global sweeps did not converge after {}", self.config.max_sweeps),
        })
    }

    // Solves node `node` against `helper` and leaves the root in the curve.
    fn solve_pillar(
        &self,
        curve: &mut InterpolatedCurve,
        node: usize,
        helper: &RateHelper,
        guess: Real,
    ) -> Result<Root> {
        let t = curve.times()[node];
        let space = curve.interpolation().value_space();
        let (lower, upper) = search_domain(space, t);
        let step = match space {
            ValueSpace::DiscountFactor => (0.01 * t * guess).max(1.0e-6),
            ValueSpace::ZeroRate | ValueSpace::ForwardRate => 0.01,
        };
        let quote = helper.quoted_rate();
        let solver = Brent::new(self.config.accuracy, self.config.max_evaluations)
            .with_function_accuracy(self.config.accuracy)
            .with_bounds(lower, upper);

        let solved = solver.solve(
            |x| {
                curve
                    .set_value(node, x)
                    .and_then(|()| helper.implied_rate(&*curve))
                    .map_or(Real::NAN, |implied| implied - quote)
            },
            guess.clamp(lower, upper),
            step,
        );
        let root = solved.map_err(|failure| calibration_error(helper, failure))?;
        curve.set_value(node, root.x)?;

        debug!(
            helper = helper.label(),
            pillar = %helper.pillar_date(),
            value = root.x,
            evaluations = root.evaluations,
            "pillar solved"
        );
        Ok(root)
    }
}

fn search_domain(space: ValueSpace, t: Time) -> (Real, Real) {
    match space {
        ValueSpace::DiscountFactor => ((-MAX_RATE * t).exp(), (-MIN_RATE * t).exp()),
        ValueSpace::ZeroRate | ValueSpace::ForwardRate => (MIN_RATE, MAX_RATE),
    }
}

// The previous pillar's value, carried to `t_i` as a flat zero in discount
// space; the helper's own quote for the first pillar.
fn local_guess(curve: &InterpolatedCurve, node: usize, helper: &RateHelper) -> Real {
    let times = curve.times();
    let values = curve.values();
    match curve.interpolation().value_space() {
        ValueSpace::DiscountFactor if node == 1 => (-helper.quoted_rate() * times[1]).exp(),
        ValueSpace::DiscountFactor => {
            let z_prev = -values[node - 1].ln() / times[node - 1];
            (-z_prev * times[node]).exp()
        }
        ValueSpace::ZeroRate | ValueSpace::ForwardRate if node == 1 => helper.quoted_rate(),
        ValueSpace::ZeroRate | ValueSpace::ForwardRate => values[node - 1],
    }
}

fn calibration_error(helper: &RateHelper, failure: SolveFailure) -> Error {
    Error::Calibration {
        helper: helper.label().to_string(),
        pillar: helper.pillar_date().to_string(),
        residual: failure.residual,
        reason: failure.reason,
    }
}
