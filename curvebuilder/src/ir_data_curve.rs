//! `IrDataCurve`: a bootstrapped curve built from a [`CurveConfig`], linked
//! into the index it was quoted on.
//!
//! Construction is two-phase. The index is created first around an empty
//! [`RelinkableHandle`], the helpers are built from the index conventions,
//! and once the curve is bootstrapped the handle is linked to it. From then
//! on the index forecasts fixings off the curve.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};
use yc_bootstrap::{
    DepositRateHelper, FraRateHelper, InstrumentKind, OisRateHelper, PiecewiseYieldCurve, RateHelper,
    SwapRateHelper,
};
use yc_core::{ensure_config, Compounding, DiscountFactor, Error, Rate, Real, RelinkableHandle, Result};
use yc_indexes::{index_by_name, RateIndex};
use yc_termstructures::{TermStructure, YieldTermStructure};
use yc_time::{Actual365Fixed, Date, DayCounter, Frequency};

use crate::config::CurveConfig;
use crate::report::{CurveReport, ReportRow};

/// A curve bootstrapped from a configuration, together with its index.
#[derive(Debug)]
pub struct IrDataCurve {
    config: CurveConfig,
    index: RateIndex,
    handle: RelinkableHandle<dyn YieldTermStructure>,
    curve: Arc<PiecewiseYieldCurve>,
}

impl IrDataCurve {
    /// Resolve the index, build the helpers, bootstrap, and link the index
    /// to the result.
    ///
    /// # Errors
    /// [`Error::Configuration`] for inputs that are inconsistent before any
    /// numerical work (see [`CurveConfig::validate`], unknown index names,
    /// an instrument that does not fit the index, non-monthly FRA tenors);
    /// [`Error::Calibration`] when the bootstrap fails.
    pub fn new(config: CurveConfig) -> Result<Self> {
        config.validate()?;

        let handle = RelinkableHandle::<dyn YieldTermStructure>::empty();
        let mut index = index_by_name(&config.index, handle.clone())?;
        if let Some(calendar) = config.calendar {
            index = index.with_calendar(calendar);
        }
        check_instruments(&config, &index)?;

        let helpers = (0..config.tenors.len())
            .map(|i| build_helper(&config, &index, i))
            .collect::<Result<Vec<_>>>()?;
        debug!(index = index.name(), helpers = helpers.len(), "rate helpers built");

        let curve = PiecewiseYieldCurve::with_config(
            config.valuation_date,
            helpers,
            config.day_count.build(),
            config.interpolation,
            config.bootstrap,
        )?;
        if config.extrapolation {
            curve.enable_extrapolation();
        }

        let curve = Arc::new(curve);
        let linked: Arc<dyn YieldTermStructure> = curve.clone();
        handle.link_to(linked);
        info!(
            index = index.name(),
            valuation_date = %config.valuation_date,
            pillars = curve.helpers().len(),
            "curve linked to index"
        );

        Ok(Self {
            config,
            index,
            handle,
            curve,
        })
    }

    /// Load a configuration file and build the curve.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::new(CurveConfig::from_file(path)?)
    }

    /// The configuration the curve was built from.
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// The curve's reference date.
    pub fn valuation_date(&self) -> Date {
        self.config.valuation_date
    }

    /// The index, forecasting from this curve.
    pub fn index(&self) -> &RateIndex {
        &self.index
    }

    /// The handle the index forecasts through.
    pub fn handle(&self) -> &RelinkableHandle<dyn YieldTermStructure> {
        &self.handle
    }

    /// The bootstrapped curve.
    pub fn curve(&self) -> &Arc<PiecewiseYieldCurve> {
        &self.curve
    }

    /// Discount factor to `date`.
    pub fn discount_factor(&self, date: Date) -> Result<DiscountFactor> {
        self.curve.discount(date)
    }

    /// Discount factors to `dates`, in order; fails on the first bad date.
    pub fn discount_factors(&self, dates: &[Date]) -> Result<Vec<DiscountFactor>> {
        self.curve.discounts(dates)
    }

    /// Continuously compounded Actual/365 Fixed zero rate to `date`.
    pub fn zero_rate(&self, date: Date) -> Result<Rate> {
        Ok(self
            .curve
            .zero_rate(date, Arc::new(Actual365Fixed), Compounding::Continuous, Frequency::Annual)?
            .rate())
    }

    /// Continuously compounded Actual/365 Fixed zero rates to `dates`.
    pub fn zero_rates(&self, dates: &[Date]) -> Result<Vec<Rate>> {
        self.zero_rates_with(dates, Arc::new(Actual365Fixed), Compounding::Continuous, Frequency::Annual)
    }

    /// Zero rates to `dates` under explicit conventions.
    pub fn zero_rates_with(
        &self,
        dates: &[Date],
        day_counter: Arc<dyn DayCounter>,
        compounding: Compounding,
        frequency: Frequency,
    ) -> Result<Vec<Rate>> {
        self.curve.zero_rates(dates, day_counter, compounding, frequency)
    }

    /// `(date, value)` for every curve node, reference date first.
    pub fn nodes(&self) -> Vec<(Date, Real)> {
        self.curve.nodes()
    }

    /// Reprice every helper on the finished curve.
    pub fn report(&self) -> Result<CurveReport> {
        let curve = self.curve.as_ref();
        let rows = curve
            .helpers()
            .iter()
            .map(|helper| {
                let end_date = helper.pillar_date();
                Ok(ReportRow {
                    label: helper.label().to_string(),
                    instrument: helper.kind(),
                    end_date,
                    market_rate: helper.quoted_rate(),
                    fair_rate: helper.implied_rate(curve)?,
                    pv: helper.npv(curve)?,
                    zero_rate: self.zero_rate(end_date)?,
                    discount: curve.discount(end_date)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(CurveReport {
            valuation_date: curve.reference_date(),
            index: self.index.name().to_string(),
            interpolation: curve.interpolation(),
            rows,
        })
    }
}

/// Build independent curves in parallel; results keep the input order.
pub fn build_curves(configs: &[CurveConfig]) -> Vec<Result<IrDataCurve>> {
    configs.par_iter().map(|c| IrDataCurve::new(c.clone())).collect()
}

fn check_instruments(config: &CurveConfig, index: &RateIndex) -> Result<()> {
    for (kind, tenor) in config.instruments.iter().zip(&config.tenors) {
        match kind {
            InstrumentKind::Fra | InstrumentKind::Swap => ensure_config!(
                index.ibor().is_some(),
                "{kind} {tenor} needs a term index, {} is overnight",
                index.name()
            ),
            InstrumentKind::Ois => ensure_config!(
                index.overnight().is_some(),
                "{kind} {tenor} needs an overnight index, {} is a term index",
                index.name()
            ),
            InstrumentKind::Deposit => {}
        }
        if *kind == InstrumentKind::Fra {
            ensure_config!(
                tenor.months().is_some_and(|m| m > 0),
                "FRA tenor {tenor} is not a whole number of months"
            );
        }
    }
    Ok(())
}

fn build_helper(config: &CurveConfig, index: &RateIndex, i: usize) -> Result<RateHelper> {
    let quote = config.quote(i);
    let tenor = config.tenors[i];
    let reference = config.valuation_date;
    let mismatch = || Error::Configuration(format!("{} {tenor} does not fit {}", config.instruments[i], index.name()));
    let helper = match config.instruments[i] {
        InstrumentKind::Deposit => {
            DepositRateHelper::from_index(quote, tenor, index.as_interest_rate_index(), reference)?.into()
        }
        InstrumentKind::Fra => {
            let ibor = index.ibor().ok_or_else(mismatch)?;
            let months = tenor.months().ok_or_else(mismatch)?;
            FraRateHelper::from_index(quote, months.unsigned_abs(), ibor, reference)?.into()
        }
        InstrumentKind::Ois => {
            let on = index.overnight().ok_or_else(mismatch)?;
            OisRateHelper::from_tenor(quote, config.settlement_days, tenor, on, reference)?.into()
        }
        InstrumentKind::Swap => {
            let ibor = index.ibor().ok_or_else(mismatch)?;
            SwapRateHelper::from_index(quote, tenor, config.fixed_leg, ibor, reference)?.into()
        }
    };
    Ok(helper)
}
