//! Calibration report: how well the bootstrapped curve reprices its quotes.

use std::fmt;

use serde::Serialize;
use yc_bootstrap::InstrumentKind;
use yc_core::{DiscountFactor, Rate, Real};
use yc_termstructures::Interpolation;
use yc_time::Date;

/// One calibration helper, as seen through the finished curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Helper label, e.g. `"SWAP 5Y"`.
    pub label: String,
    /// Instrument tag.
    pub instrument: InstrumentKind,
    /// Pillar (end) date.
    pub end_date: Date,
    /// Market quote, decimal.
    pub market_rate: Rate,
    /// Rate implied by the curve, decimal.
    pub fair_rate: Rate,
    /// Receiver-fixed PV per unit notional.
    pub pv: Real,
    /// Zero rate to the end date, decimal.
    pub zero_rate: Rate,
    /// Discount factor to the end date.
    pub discount: DiscountFactor,
}

/// Per-helper calibration report of one curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveReport {
    /// Curve reference date.
    pub valuation_date: Date,
    /// Index name.
    pub index: String,
    /// Interpolation strategy.
    pub interpolation: Interpolation,
    /// One row per helper, by pillar date.
    pub rows: Vec<ReportRow>,
}

impl CurveReport {
    /// Largest `|fair - market|` over the rows.
    pub fn max_abs_error(&self) -> Real {
        self.rows
            .iter()
            .map(|r| (r.fair_rate - r.market_rate).abs())
            .fold(0.0, Real::max)
    }
}

impl fmt::Display for CurveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} ({})", self.index, self.valuation_date, self.interpolation)?;
        writeln!(
            f,
            "{:<14} {:<10} {:>12} {:>12} {:>12} {:>10} {:>10}",
            "Helper", "End Date", "Market Rate", "Fair Rate", "PV", "Zero Rate", "Discount"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<14} {:<10} {:>11.6}% {:>11.6}% {:>12.3e} {:>9.5}% {:>10.8}",
                row.label,
                row.end_date,
                row.market_rate * 100.0,
                row.fair_rate * 100.0,
                row.pv,
                row.zero_rate * 100.0,
                row.discount
            )?;
        }
        Ok(())
    }
}
