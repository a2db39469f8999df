//! Curve configuration: what to bootstrap, from which quotes, under which
//! conventions.
//!
//! A configuration is usually read from TOML:
//!
//! ```toml
//! valuation_date = "2024-01-02"
//! index = "ESTR"
//! tenors = ["1M", "6M", "1Y", "2Y"]
//! rates = [3.90, 3.85, 3.60, 3.10]
//! instruments = ["OIS", "OIS", "OIS", "OIS"]
//! interpolation = "log-linear-discount"
//!
//! [bootstrap]
//! accuracy = 1e-12
//! ```
//!
//! Every field other than the first five has a default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use yc_bootstrap::{BootstrapConfig, FixedLegConventions, InstrumentKind};
use yc_core::{ensure_config, Error, Real, Result};
use yc_termstructures::Interpolation;
use yc_time::{CalendarKind, Date, DayCounterKind, Period};

/// Inputs of one curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Reference date of the curve.
    pub valuation_date: Date,
    /// Instrument tenors, e.g. `"3M"`, `"10Y"`.
    pub tenors: Vec<Period>,
    /// Quotes, one per tenor.
    pub rates: Vec<Real>,
    /// Instrument tags, one per tenor.
    pub instruments: Vec<InstrumentKind>,
    /// Index name, e.g. `"ESTR"` or `"SEK_STIBOR_3M"`.
    pub index: String,
    /// Quotes are in percent (`3.5` means 3.5 %).
    #[serde(default = "default_rate_in_percent")]
    pub rate_in_percent: bool,
    /// Interpolation strategy.
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Business days from the valuation date to the start of OIS helpers.
    #[serde(default = "default_settlement_days")]
    pub settlement_days: u32,
    /// Calendar override; the index calendar when absent.
    #[serde(default)]
    pub calendar: Option<CalendarKind>,
    /// Day counter of the curve's time axis.
    #[serde(default)]
    pub day_count: DayCounterKind,
    /// Fixed-leg conventions of SWAP helpers.
    #[serde(default)]
    pub fixed_leg: FixedLegConventions,
    /// Allow queries beyond the last pillar.
    #[serde(default)]
    pub extrapolation: bool,
    /// Solver and sweep settings.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

fn default_rate_in_percent() -> bool {
    true
}

fn default_settlement_days() -> u32 {
    2
}

impl CurveConfig {
    /// A configuration with default conventions.
    pub fn new(
        valuation_date: Date,
        tenors: Vec<Period>,
        rates: Vec<Real>,
        instruments: Vec<InstrumentKind>,
        index: impl Into<String>,
    ) -> Self {
        Self {
            valuation_date,
            tenors,
            rates,
            instruments,
            index: index.into(),
            rate_in_percent: default_rate_in_percent(),
            interpolation: Interpolation::default(),
            settlement_days: default_settlement_days(),
            calendar: None,
            day_count: DayCounterKind::default(),
            fixed_leg: FixedLegConventions::default(),
            extrapolation: false,
            bootstrap: BootstrapConfig::default(),
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Configuration(format!("invalid curve configuration: {e}")))
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Configuration(format!("invalid curve configuration: {e}")))
    }

    /// Read a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Configuration(format!("cannot read {}: {e}", path.display())))?;
        debug!(path = %path.display(), "loading curve configuration");
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let parsed = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(Error::Configuration(format!(
                "{}: expected a .toml or .json file",
                path.display()
            ))),
        };
        parsed.map_err(|e| match e {
            Error::Configuration(msg) => Error::Configuration(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Quote `i` as a decimal rate.
    pub fn quote(&self, i: usize) -> Real {
        if self.rate_in_percent {
            self.rates[i] / 100.0
        } else {
            self.rates[i]
        }
    }

    /// Checks that need no market conventions: non-empty, equal-length
    /// sequences of finite quotes.
    pub fn validate(&self) -> Result<()> {
        ensure_config!(!self.tenors.is_empty(), "curve configuration has no instruments");
        ensure_config!(
            self.tenors.len() == self.rates.len() && self.rates.len() == self.instruments.len(),
            "{} tenors, {} rates and {} instruments",
            self.tenors.len(),
            self.rates.len(),
            self.instruments.len()
        );
        if let Some(i) = self.rates.iter().position(|r| !r.is_finite()) {
            return Err(Error::Configuration(format!(
                "rate {} for {} {} is not finite",
                self.rates[i], self.instruments[i], self.tenors[i]
            )));
        }
        if let Some(i) = self.tenors.iter().position(|t| t.length <= 0) {
            return Err(Error::Configuration(format!(
                "tenor {} of {} must be positive",
                self.tenors[i], self.instruments[i]
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yc_time::{BusinessDayConvention, Frequency, TimeUnit};

    const ESTR: &str = r#"
        valuation_date = "2024-01-02"
        index = "ESTR"
        tenors = ["1M", "1Y"]
        rates = [3.9, 3.6]
        instruments = ["OIS", "OIS"]
    "#;

    #[test]
    fn toml_fills_defaults() {
        let config = CurveConfig::from_toml_str(ESTR).unwrap();
        assert_eq!(config.valuation_date, Date::from_ymd(2024, 1, 2).unwrap());
        assert_eq!(config.tenors[1], Period::new(1, TimeUnit::Years));
        assert!(config.rate_in_percent);
        assert_eq!(config.interpolation, Interpolation::LinearZero);
        assert_eq!(config.settlement_days, 2);
        assert_eq!(config.calendar, None);
        assert_eq!(config.day_count, DayCounterKind::Actual365Fixed);
        assert_eq!(config.fixed_leg.frequency, Frequency::Annual);
        assert_eq!(config.fixed_leg.convention, BusinessDayConvention::Following);
        assert_eq!(config.fixed_leg.day_count, DayCounterKind::Thirty360);
        assert_eq!(config.bootstrap, BootstrapConfig::default());
        assert!((config.quote(0) - 0.039).abs() < 1e-15);
        config.validate().unwrap();
    }

    #[test]
    fn nested_tables_override_defaults() {
        let text = format!(
            "{ESTR}\ninterpolation = \"cubic-zero\"\ncalendar = \"Target\"\n\n[fixed_leg]\nfrequency = \"Semiannual\"\n\n[bootstrap]\nmax_sweeps = 7\n"
        );
        let config = CurveConfig::from_toml_str(&text).unwrap();
        assert_eq!(config.interpolation, Interpolation::CubicZero);
        assert_eq!(config.calendar, Some(CalendarKind::Target));
        assert_eq!(config.fixed_leg.frequency, Frequency::Semiannual);
        assert_eq!(config.fixed_leg.day_count, DayCounterKind::Thirty360);
        assert_eq!(config.bootstrap.max_sweeps, 7);
        assert_eq!(config.bootstrap.accuracy, 1e-12);
    }

    #[test]
    fn json_round_trip() {
        let config = CurveConfig::from_toml_str(ESTR).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"2024-01-02\"") && json.contains("\"OIS\""));
        let back = CurveConfig::from_json_str(&json).unwrap();
        assert_eq!(back.valuation_date, config.valuation_date);
        assert_eq!(back.tenors, config.tenors);
        assert_eq!(back.instruments, config.instruments);
        assert_eq!(back.interpolation, config.interpolation);
        assert_eq!(back.calendar, None);
    }

    #[test]
    fn malformed_inputs_are_configuration_errors() {
        let bad_tag = ESTR.replace("[\"OIS\", \"OIS\"]", "[\"OIS\", \"BOND\"]");
        assert!(CurveConfig::from_toml_str(&bad_tag).unwrap_err().is_configuration());
        let bad_tenor = ESTR.replace("\"1Y\"", "\"1Q\"");
        assert!(CurveConfig::from_toml_str(&bad_tenor).unwrap_err().is_configuration());
        let bad_date = ESTR.replace("2024-01-02", "2024-13-02");
        assert!(CurveConfig::from_toml_str(&bad_date).unwrap_err().is_configuration());
        assert!(CurveConfig::from_json_str("{").unwrap_err().is_configuration());
    }

    #[test]
    fn validation_catches_length_mismatch() {
        let mut config = CurveConfig::from_toml_str(ESTR).unwrap();
        config.rates.pop();
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("2 tenors, 1 rates and 2 instruments"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = std::env::temp_dir().join("curvebuilder-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("curve.yaml");
        fs::write(&path, ESTR).unwrap();
        assert!(CurveConfig::from_file(&path).unwrap_err().is_configuration());
        assert!(CurveConfig::from_file(dir.join("missing.toml")).unwrap_err().is_configuration());
    }
}
