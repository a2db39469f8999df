//! Concrete overnight index factory functions.

use crate::overnight_index::OvernightIndex;
use yc_core::RelinkableHandle;
use yc_termstructures::YieldTermStructure;
use yc_time::{CalendarKind, DayCounterKind};

/// Create a SOFR (Secured Overnight Financing Rate) index.
///
/// - Currency: USD
/// - Calendar: US (settlement)
/// - Day counter: Actual/360
/// - Fixing days: 0
pub fn sofr(forwarding: RelinkableHandle<dyn YieldTermStructure>) -> OvernightIndex {
    OvernightIndex::new(
        "USD-SOFR",
        0,
        "USD",
        CalendarKind::UnitedStates,
        DayCounterKind::Actual360,
        forwarding,
    )
}

/// Create an €STR (Euro Short-Term Rate) index.
///
/// - Currency: EUR
/// - Calendar: TARGET
/// - Day counter: Actual/360
/// - Fixing days: 0
pub fn estr(forwarding: RelinkableHandle<dyn YieldTermStructure>) -> OvernightIndex {
    OvernightIndex::new("EUR-ESTR", 0, "EUR", CalendarKind::Target, DayCounterKind::Actual360, forwarding)
}

/// Create a SONIA (Sterling Overnight Index Average) index.
///
/// - Currency: GBP
/// - Calendar: UK (settlement)
/// - Day counter: Actual/365 (Fixed)
/// - Fixing days: 0
pub fn sonia(forwarding: RelinkableHandle<dyn YieldTermStructure>) -> OvernightIndex {
    OvernightIndex::new(
        "GBP-SONIA",
        0,
        "GBP",
        CalendarKind::UnitedKingdom,
        DayCounterKind::Actual365Fixed,
        forwarding,
    )
}
