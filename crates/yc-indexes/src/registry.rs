//! Lookup of indexes by the names used in curve configurations.
//!
//! | name                          | index                          |
//! |-------------------------------|--------------------------------|
//! | `ESTR`, `SOFR`, `SONIA`       | overnight                      |
//! | `SEK_STIBOR_<tenor>`          | STIBOR 1W, 1M, 2M, 3M, 6M      |
//! | `EUR_EURIBOR_<tenor>`         | Euribor at any tenor           |

use std::sync::Arc;

use crate::ibor::{euribor, stibor};
use crate::ibor_index::IborIndex;
use crate::index::Index;
use crate::interest_rate_index::{IndexConventions, InterestRateIndex};
use crate::overnight::{estr, sofr, sonia};
use crate::overnight_index::OvernightIndex;
use yc_core::{Error, RelinkableHandle, Result};
use yc_termstructures::YieldTermStructure;
use yc_time::{CalendarKind, Period};

/// An index resolved from its configuration name.
#[derive(Debug, Clone)]
pub enum RateIndex {
    /// Overnight index, used by OIS helpers.
    Overnight(Arc<OvernightIndex>),
    /// Term index, used by deposit, FRA and swap helpers.
    Ibor(Arc<IborIndex>),
}

impl RateIndex {
    /// The index behind either variant.
    pub fn as_interest_rate_index(&self) -> &dyn InterestRateIndex {
        match self {
            RateIndex::Overnight(i) => i.as_ref(),
            RateIndex::Ibor(i) => i.as_ref(),
        }
    }

    /// The overnight index, if this is one.
    pub fn overnight(&self) -> Option<&Arc<OvernightIndex>> {
        match self {
            RateIndex::Overnight(i) => Some(i),
            RateIndex::Ibor(_) => None,
        }
    }

    /// The IBOR index, if this is one.
    pub fn ibor(&self) -> Option<&Arc<IborIndex>> {
        match self {
            RateIndex::Ibor(i) => Some(i),
            RateIndex::Overnight(_) => None,
        }
    }

    /// Index name.
    pub fn name(&self) -> &str {
        match self {
            RateIndex::Overnight(i) => i.as_ref().name(),
            RateIndex::Ibor(i) => i.as_ref().name(),
        }
    }

    /// The same index on another calendar, forecasting from the same handle.
    /// Fixings are not carried over.
    pub fn with_calendar(&self, calendar: CalendarKind) -> RateIndex {
        let conventions = IndexConventions {
            calendar,
            ..self.as_interest_rate_index().conventions().clone()
        };
        let forwarding = self.as_interest_rate_index().forwarding_term_structure().clone();
        match self {
            RateIndex::Overnight(_) => RateIndex::Overnight(Arc::new(OvernightIndex::new(
                conventions.name,
                conventions.fixing_days,
                conventions.currency,
                conventions.calendar,
                conventions.day_counter,
                forwarding,
            ))),
            RateIndex::Ibor(_) => RateIndex::Ibor(Arc::new(IborIndex::new(conventions, forwarding))),
        }
    }
}

/// Resolve a configuration name to an index forecasting from `forwarding`.
///
/// Names are case-insensitive.
///
/// # Errors
/// [`Error::Configuration`] for unknown names or unsupported tenors.
pub fn index_by_name(name: &str, forwarding: RelinkableHandle<dyn YieldTermStructure>) -> Result<RateIndex> {
    let key = name.trim().to_ascii_uppercase();
    let unknown = || Error::Configuration(format!("unknown index '{name}'"));
    let index = match key.as_str() {
        "ESTR" => RateIndex::Overnight(Arc::new(estr(forwarding))),
        "SOFR" => RateIndex::Overnight(Arc::new(sofr(forwarding))),
        "SONIA" => RateIndex::Overnight(Arc::new(sonia(forwarding))),
        _ => {
            if let Some(tenor) = key.strip_prefix("SEK_STIBOR_") {
                let tenor: Period = tenor.parse().map_err(|_| unknown())?;
                RateIndex::Ibor(Arc::new(stibor(tenor, forwarding)?))
            } else if let Some(tenor) = key.strip_prefix("EUR_EURIBOR_") {
                let tenor: Period = tenor.parse().map_err(|_| unknown())?;
                RateIndex::Ibor(Arc::new(euribor(tenor, forwarding)))
            } else {
                return Err(unknown());
            }
        }
    };
    Ok(index)
}
