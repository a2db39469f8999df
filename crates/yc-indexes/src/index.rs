//! `Index`: base trait for all market indexes.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use yc_core::{Real, Result};
use yc_time::{Calendar, Date};

/// Store for historical fixings.
///
/// Thread-safe map from `Date` to fixing value. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct FixingStore {
    data: Arc<RwLock<BTreeMap<Date, Real>>>,
}

impl FixingStore {
    /// Create a new, empty fixing store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixing, replacing any previous value for `date`.
    pub fn add(&self, date: Date, value: Real) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(date, value);
    }

    /// Look up a fixing.
    pub fn get(&self, date: Date) -> Option<Real> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&date)
            .copied()
    }

    /// Number of stored fixings.
    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all fixings.
    pub fn clear(&self) {
        self.data.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// Base trait for all market indexes.
pub trait Index: std::fmt::Debug + Send + Sync {
    /// Unique name (e.g. `"EUR-Euribor-6M"`).
    fn name(&self) -> &str;

    /// Calendar used by this index.
    fn fixing_calendar(&self) -> &dyn Calendar;

    /// Whether `date` is a valid fixing date.
    fn is_valid_fixing_date(&self, date: Date) -> bool {
        self.fixing_calendar().is_business_day(date)
    }

    /// Return the fixing for `date`: the stored value if there is one and
    /// `force_forecast` is false, a forecast otherwise.
    fn fixing(&self, date: Date, force_forecast: bool) -> Result<Real>;

    /// Reference to the historic-fixing store.
    fn fixing_store(&self) -> &FixingStore;

    /// Record a historical fixing.
    fn add_fixing(&self, date: Date, value: Real) {
        self.fixing_store().add(date, value);
    }
}
