//! `Frequency`: how often coupon events recur.

use std::str::FromStr;

use yc_core::errors::Error;

/// Event / payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// Once (maturity only).
    Once,
    /// Annual (once per year).
    #[default]
    Annual,
    /// Semi-annual (twice per year).
    Semiannual,
    /// Quarterly (four times per year).
    Quarterly,
    /// Bi-monthly (six times per year).
    Bimonthly,
    /// Monthly (twelve times per year).
    Monthly,
    /// Weekly (fifty-two times per year).
    Weekly,
    /// Daily.
    Daily,
}

impl Frequency {
    /// Number of periods per year; zero for `Once`.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Once => 0,
            Frequency::Annual => 1,
            Frequency::Semiannual => 2,
            Frequency::Quarterly => 4,
            Frequency::Bimonthly => 6,
            Frequency::Monthly => 12,
            Frequency::Weekly => 52,
            Frequency::Daily => 365,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Once => "Once",
            Frequency::Annual => "Annual",
            Frequency::Semiannual => "Semiannual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Bimonthly => "Bimonthly",
            Frequency::Monthly => "Monthly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(Frequency::Once),
            "annual" | "yearly" => Ok(Frequency::Annual),
            "semiannual" | "semi-annual" => Ok(Frequency::Semiannual),
            "quarterly" => Ok(Frequency::Quarterly),
            "bimonthly" => Ok(Frequency::Bimonthly),
            "monthly" => Ok(Frequency::Monthly),
            "weekly" => Ok(Frequency::Weekly),
            "daily" => Ok(Frequency::Daily),
            other => Err(Error::Configuration(format!("unknown frequency '{other}'"))),
        }
    }
}
