//! Rate helpers for yield-curve bootstrapping.
//!
//! A *rate helper* holds a market quote together with the dates and
//! conventions needed to recompute that quote from a curve. The bootstrapper
//! moves the curve value at the helper's *pillar date* (the last date the
//! helper reads) until the implied rate equals the quote.
//!
//! Every helper computes its implied rate from discount factors only:
//!
//! | helper  | implied rate                                              |
//! |---------|-----------------------------------------------------------|
//! | deposit | `(P(s)/P(e) - 1) / τ(s, e)`                               |
//! | FRA     | `(P(s)/P(e) - 1) / τ(s, e)`                               |
//! | OIS     | `(P(s) - P(e)) / Σ τ_i P(p_i)` on the annual fixed leg    |
//! | swap    | `(P(s) - P(e)) / Σ τ_i P(p_i)` on the fixed leg           |
//!
//! OIS and swap helpers may discount on a separate curve; the numerator then
//! becomes the projected floating leg `Σ P_d(e_j)·(P(s_j)/P(e_j) - 1)` and
//! the annuity is taken on `P_d`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use yc_core::{ensure, ensure_config, Error, Rate, Real, RelinkableHandle, Result};
use yc_indexes::{IborIndex, InterestRateIndex, OvernightIndex};
use yc_termstructures::YieldTermStructure;
use yc_time::{
    BusinessDayConvention, Date, DateGeneration, DayCounter, DayCounterKind, Frequency, Period, Schedule,
    ScheduleBuilder, TimeUnit,
};

// ── InstrumentKind ────────────────────────────────────────────────────────────

/// Instrument tag of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum InstrumentKind {
    /// Money-market deposit.
    Deposit,
    /// Forward-rate agreement.
    Fra,
    /// Overnight-indexed swap.
    Ois,
    /// Fixed-for-floating IBOR swap.
    Swap,
}

impl InstrumentKind {
    /// Configuration tag, e.g. `"DEPOSIT"`.
    pub fn tag(self) -> &'static str {
        match self {
            InstrumentKind::Deposit => "DEPOSIT",
            InstrumentKind::Fra => "FRA",
            InstrumentKind::Ois => "OIS",
            InstrumentKind::Swap => "SWAP",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for InstrumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEPOSIT" => Ok(InstrumentKind::Deposit),
            "FRA" => Ok(InstrumentKind::Fra),
            "OIS" => Ok(InstrumentKind::Ois),
            "SWAP" => Ok(InstrumentKind::Swap),
            _ => Err(Error::Configuration(format!("unknown instrument '{s}'"))),
        }
    }
}

/// Fixed-leg conventions of a swap helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FixedLegConventions {
    /// Coupon frequency.
    pub frequency: Frequency,
    /// Adjustment of coupon dates.
    pub convention: BusinessDayConvention,
    /// Accrual day counter.
    pub day_count: DayCounterKind,
}

impl Default for FixedLegConventions {
    fn default() -> Self {
        Self {
            frequency: Frequency::Annual,
            convention: BusinessDayConvention::Following,
            day_count: DayCounterKind::Thirty360,
        }
    }
}

// ── Shared pieces ─────────────────────────────────────────────────────────────

fn check_dates(label: &str, reference_date: Date, start: Date, pillar: Date) -> Result<()> {
    ensure_config!(
        pillar > reference_date,
        "{label}: pillar {pillar} is not after the reference date {reference_date}"
    );
    ensure_config!(
        start >= reference_date,
        "{label}: start {start} precedes the reference date {reference_date}"
    );
    ensure_config!(start < pillar, "{label}: start {start} is not before the pillar {pillar}");
    Ok(())
}

fn simple_rate(curve: &dyn YieldTermStructure, start: Date, end: Date, tau: Real) -> Result<Rate> {
    Ok((curve.discount(start)? / curve.discount(end)? - 1.0) / tau)
}

/// `Σ τ_i P(p_i)` over the periods of `schedule`.
fn annuity_on(curve: &dyn YieldTermStructure, schedule: &Schedule, dc: &dyn DayCounter) -> Result<Real> {
    schedule
        .periods()
        .map(|(s, e)| -> Result<Real> { Ok(dc.year_fraction(s, e) * curve.discount(e)?) })
        .sum()
}

/// `Σ P_d(e_j)·(P_f(s_j)/P_f(e_j) - 1)` over the periods of `schedule`.
fn projected_float_leg(
    forwarding: &dyn YieldTermStructure,
    discounting: &dyn YieldTermStructure,
    schedule: &Schedule,
) -> Result<Real> {
    schedule
        .periods()
        .map(|(s, e)| -> Result<Real> {
            Ok(discounting.discount(e)? * (forwarding.discount(s)? / forwarding.discount(e)? - 1.0))
        })
        .sum()
}

fn linked(handle: &RelinkableHandle<dyn YieldTermStructure>, label: &str) -> Result<Arc<dyn YieldTermStructure>> {
    handle
        .current()
        .ok_or_else(|| Error::EmptyHandle(format!("{label}: discount curve handle is empty")))
}

// ── DepositRateHelper ─────────────────────────────────────────────────────────

/// A deposit (money-market) rate helper.
///
/// The implied rate is the simple rate over `[start, maturity]`.
#[derive(Debug, Clone)]
pub struct DepositRateHelper {
    quote: Rate,
    start: Date,
    maturity: Date,
    day_counter: Arc<dyn DayCounter>,
    label: String,
}

impl DepositRateHelper {
    /// Create a deposit helper from explicit start and maturity dates.
    pub fn new(
        quote: Rate,
        start: Date,
        maturity: Date,
        day_counter: Arc<dyn DayCounter>,
        reference_date: Date,
    ) -> Result<Self> {
        let label = format!("DEPOSIT {start}/{maturity}");
        check_dates(&label, reference_date, start, maturity)?;
        Ok(Self {
            quote,
            start,
            maturity,
            day_counter,
            label,
        })
    }

    /// Create a deposit helper of length `tenor` under the conventions of
    /// `index`: the deposit starts at the index value date for a fixing on
    /// `reference_date`.
    pub fn from_index(quote: Rate, tenor: Period, index: &dyn InterestRateIndex, reference_date: Date) -> Result<Self> {
        let label = format!("DEPOSIT {tenor}");
        let start = index.value_date(reference_date)?;
        let maturity = index.calendar().advance(
            start,
            tenor,
            index.business_day_convention(),
            index.end_of_month(),
        )?;
        check_dates(&label, reference_date, start, maturity)?;
        Ok(Self {
            quote,
            start,
            maturity,
            day_counter: index.day_counter(),
            label,
        })
    }

    fn tau(&self) -> Real {
        self.day_counter.year_fraction(self.start, self.maturity)
    }

    fn implied_rate(&self, curve: &dyn YieldTermStructure) -> Result<Rate> {
        simple_rate(curve, self.start, self.maturity, self.tau())
    }

    fn annuity(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        Ok(self.tau() * curve.discount(self.maturity)?)
    }
}

// ── FraRateHelper ─────────────────────────────────────────────────────────────

/// A forward-rate-agreement rate helper.
///
/// The implied rate is the simple forward between the FRA start and
/// maturity dates.
#[derive(Debug, Clone)]
pub struct FraRateHelper {
    quote: Rate,
    start: Date,
    maturity: Date,
    day_counter: Arc<dyn DayCounter>,
    label: String,
}

impl FraRateHelper {
    /// Create a FRA helper from explicit start and maturity dates.
    pub fn new(
        quote: Rate,
        start: Date,
        maturity: Date,
        day_counter: Arc<dyn DayCounter>,
        reference_date: Date,
    ) -> Result<Self> {
        let label = format!("FRA {start}/{maturity}");
        check_dates(&label, reference_date, start, maturity)?;
        Ok(Self {
            quote,
            start,
            maturity,
            day_counter,
            label,
        })
    }

    /// Create a `months_to_start` × (`months_to_start` + index tenor) FRA.
    ///
    /// The start is `months_to_start` months after the spot date of `index`;
    /// the maturity is the index maturity for that start.
    pub fn from_index(quote: Rate, months_to_start: u32, index: &IborIndex, reference_date: Date) -> Result<Self> {
        let tenor = index.tenor();
        let end_months = tenor.months().map(|m| m + months_to_start as i32);
        let label = match end_months {
            Some(end) => format!("FRA {months_to_start}x{end}"),
            None => format!("FRA {months_to_start}M+{tenor}"),
        };
        let spot = index.value_date(reference_date)?;
        let start = index.calendar().advance(
            spot,
            Period::new(months_to_start as i32, TimeUnit::Months),
            index.business_day_convention(),
            index.end_of_month(),
        )?;
        let maturity = index.maturity_date(start)?;
        check_dates(&label, reference_date, start, maturity)?;
        Ok(Self {
            quote,
            start,
            maturity,
            day_counter: index.day_counter(),
            label,
        })
    }

    fn tau(&self) -> Real {
        self.day_counter.year_fraction(self.start, self.maturity)
    }

    fn implied_rate(&self, curve: &dyn YieldTermStructure) -> Result<Rate> {
        simple_rate(curve, self.start, self.maturity, self.tau())
    }

    fn annuity(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        Ok(self.tau() * curve.discount(self.maturity)?)
    }
}

// ── OisRateHelper ─────────────────────────────────────────────────────────────

/// An overnight-indexed-swap rate helper.
///
/// The fixed leg pays annually, accrues under the index day counter and is
/// generated backward from the maturity. The compounded overnight leg over
/// `[s, e]` is worth `P(s)/P(e) - 1` per unit of the curve it is projected
/// from.
#[derive(Debug, Clone)]
pub struct OisRateHelper {
    quote: Rate,
    schedule: Schedule,
    day_counter: Arc<dyn DayCounter>,
    discount: Option<RelinkableHandle<dyn YieldTermStructure>>,
    label: String,
}

impl OisRateHelper {
    /// Create an OIS helper of length `tenor` starting `settlement_days`
    /// business days after `reference_date`.
    ///
    /// The maturity is the start advanced by `tenor`, Modified Following.
    pub fn from_tenor(
        quote: Rate,
        settlement_days: u32,
        tenor: Period,
        index: &OvernightIndex,
        reference_date: Date,
    ) -> Result<Self> {
        let label = format!("OIS {tenor}");
        let calendar = index.calendar();
        let start = calendar.advance_business_days(reference_date, settlement_days as i32)?;
        let end = calendar.advance(start, tenor, BusinessDayConvention::ModifiedFollowing, false)?;
        Self::build(quote, start, end, index, reference_date, label)
    }

    /// Create an OIS helper between explicit dates.
    pub fn from_dates(
        quote: Rate,
        start: Date,
        end: Date,
        index: &OvernightIndex,
        reference_date: Date,
    ) -> Result<Self> {
        let label = format!("OIS {start}/{end}");
        Self::build(quote, start, end, index, reference_date, label)
    }

    fn build(
        quote: Rate,
        start: Date,
        end: Date,
        index: &OvernightIndex,
        reference_date: Date,
        label: String,
    ) -> Result<Self> {
        check_dates(&label, reference_date, start, end)?;
        let calendar = index.calendar();
        let schedule = ScheduleBuilder::new(start, end, Period::new(1, TimeUnit::Years), calendar.as_ref())
            .with_convention(BusinessDayConvention::ModifiedFollowing)
            .with_termination_convention(BusinessDayConvention::ModifiedFollowing)
            .with_rule(DateGeneration::Backward)
            .build()?;
        check_dates(&label, reference_date, schedule.start_date(), schedule.end_date())?;
        Ok(Self {
            quote,
            schedule,
            day_counter: index.day_counter(),
            discount: None,
            label,
        })
    }

    /// Discount on `handle` instead of the curve being built.
    pub fn with_discount_curve(mut self, handle: RelinkableHandle<dyn YieldTermStructure>) -> Self {
        self.discount = Some(handle);
        self
    }

    /// The fixed-leg schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn implied_rate(&self, curve: &dyn YieldTermStructure) -> Result<Rate> {
        let dc = &self.day_counter;
        match &self.discount {
            None => {
                let annuity = annuity_on(curve, &self.schedule, dc.as_ref())?;
                Ok((curve.discount(self.schedule.start_date())? - curve.discount(self.schedule.end_date())?) / annuity)
            }
            Some(handle) => {
                let discounting = linked(handle, &self.label)?;
                let annuity = annuity_on(discounting.as_ref(), &self.schedule, dc.as_ref())?;
                Ok(projected_float_leg(curve, discounting.as_ref(), &self.schedule)? / annuity)
            }
        }
    }

    fn annuity(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        let dc = &self.day_counter;
        match &self.discount {
            None => annuity_on(curve, &self.schedule, dc.as_ref()),
            Some(handle) => annuity_on(linked(handle, &self.label)?.as_ref(), &self.schedule, dc.as_ref()),
        }
    }
}

// ── SwapRateHelper ────────────────────────────────────────────────────────────

/// A fixed-for-floating IBOR swap rate helper.
///
/// Both legs start at the index spot date and end `tenor` later. The fixed
/// leg follows [`FixedLegConventions`]; the floating leg resets at the index
/// tenor.
#[derive(Debug, Clone)]
pub struct SwapRateHelper {
    quote: Rate,
    fixed_schedule: Schedule,
    fixed_day_counter: Arc<dyn DayCounter>,
    float_schedule: Schedule,
    discount: Option<RelinkableHandle<dyn YieldTermStructure>>,
    label: String,
}

impl SwapRateHelper {
    /// Create a swap helper of length `tenor` on `index`.
    pub fn from_index(
        quote: Rate,
        tenor: Period,
        fixed_leg: FixedLegConventions,
        index: &IborIndex,
        reference_date: Date,
    ) -> Result<Self> {
        let label = format!("SWAP {tenor}");
        let calendar = index.calendar();
        let start = index.value_date(reference_date)?;
        let end = calendar.advance(start, tenor, index.business_day_convention(), index.end_of_month())?;
        check_dates(&label, reference_date, start, end)?;

        let fixed_tenor = Period::from_frequency(fixed_leg.frequency)?;
        let fixed_schedule = ScheduleBuilder::new(start, end, fixed_tenor, calendar.as_ref())
            .with_convention(fixed_leg.convention)
            .with_termination_convention(fixed_leg.convention)
            .with_rule(DateGeneration::Backward)
            .end_of_month(index.end_of_month())
            .build()?;
        let float_schedule = ScheduleBuilder::new(start, end, index.tenor(), calendar.as_ref())
            .with_convention(index.business_day_convention())
            .with_termination_convention(index.business_day_convention())
            .with_rule(DateGeneration::Backward)
            .end_of_month(index.end_of_month())
            .build()?;
        ensure!(
            fixed_schedule.end_date() == float_schedule.end_date(),
            "{label}: fixed leg ends {} but floating leg ends {}",
            fixed_schedule.end_date(),
            float_schedule.end_date()
        );
        check_dates(&label, reference_date, fixed_schedule.start_date(), fixed_schedule.end_date())?;

        Ok(Self {
            quote,
            fixed_schedule,
            fixed_day_counter: fixed_leg.day_count.build(),
            float_schedule,
            discount: None,
            label,
        })
    }

    /// Discount on `handle` instead of the curve being built.
    pub fn with_discount_curve(mut self, handle: RelinkableHandle<dyn YieldTermStructure>) -> Self {
        self.discount = Some(handle);
        self
    }

    /// The fixed-leg schedule.
    pub fn fixed_schedule(&self) -> &Schedule {
        &self.fixed_schedule
    }

    /// The floating-leg schedule.
    pub fn float_schedule(&self) -> &Schedule {
        &self.float_schedule
    }

    fn implied_rate(&self, curve: &dyn YieldTermStructure) -> Result<Rate> {
        match &self.discount {
            None => {
                let annuity = annuity_on(curve, &self.fixed_schedule, self.fixed_day_counter.as_ref())?;
                let start = self.fixed_schedule.start_date();
                let end = self.fixed_schedule.end_date();
                Ok((curve.discount(start)? - curve.discount(end)?) / annuity)
            }
            Some(handle) => {
                let discounting = linked(handle, &self.label)?;
                let annuity = annuity_on(discounting.as_ref(), &self.fixed_schedule, self.fixed_day_counter.as_ref())?;
                Ok(projected_float_leg(curve, discounting.as_ref(), &self.float_schedule)? / annuity)
            }
        }
    }

    fn annuity(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        let dc = self.fixed_day_counter.as_ref();
        match &self.discount {
            None => annuity_on(curve, &self.fixed_schedule, dc),
            Some(handle) => annuity_on(linked(handle, &self.label)?.as_ref(), &self.fixed_schedule, dc),
        }
    }
}

// ── RateHelper ────────────────────────────────────────────────────────────────

/// A single market quote that constrains the curve at its pillar date.
#[derive(Debug, Clone)]
pub enum RateHelper {
    /// Deposit.
    Deposit(DepositRateHelper),
    /// FRA.
    Fra(FraRateHelper),
    /// Overnight-indexed swap.
    Ois(OisRateHelper),
    /// IBOR swap.
    Swap(SwapRateHelper),
}

impl RateHelper {
    /// Instrument tag.
    pub fn kind(&self) -> InstrumentKind {
        match self {
            RateHelper::Deposit(_) => InstrumentKind::Deposit,
            RateHelper::Fra(_) => InstrumentKind::Fra,
            RateHelper::Ois(_) => InstrumentKind::Ois,
            RateHelper::Swap(_) => InstrumentKind::Swap,
        }
    }

    /// Instrument tag and tenor (or dates), e.g. `"SWAP 5Y"`.
    pub fn label(&self) -> &str {
        match self {
            RateHelper::Deposit(h) => &h.label,
            RateHelper::Fra(h) => &h.label,
            RateHelper::Ois(h) => &h.label,
            RateHelper::Swap(h) => &h.label,
        }
    }

    /// The market quote, as a decimal.
    pub fn quoted_rate(&self) -> Rate {
        match self {
            RateHelper::Deposit(h) => h.quote,
            RateHelper::Fra(h) => h.quote,
            RateHelper::Ois(h) => h.quote,
            RateHelper::Swap(h) => h.quote,
        }
    }

    /// First date read from the curve.
    pub fn start_date(&self) -> Date {
        match self {
            RateHelper::Deposit(h) => h.start,
            RateHelper::Fra(h) => h.start,
            RateHelper::Ois(h) => h.schedule.start_date(),
            RateHelper::Swap(h) => h.fixed_schedule.start_date(),
        }
    }

    /// Last date read from the curve; the pillar this helper calibrates.
    pub fn pillar_date(&self) -> Date {
        match self {
            RateHelper::Deposit(h) => h.maturity,
            RateHelper::Fra(h) => h.maturity,
            RateHelper::Ois(h) => h.schedule.end_date(),
            RateHelper::Swap(h) => h.fixed_schedule.end_date(),
        }
    }

    /// The quote implied by `curve`.
    pub fn implied_rate(&self, curve: &dyn YieldTermStructure) -> Result<Rate> {
        match self {
            RateHelper::Deposit(h) => h.implied_rate(curve),
            RateHelper::Fra(h) => h.implied_rate(curve),
            RateHelper::Ois(h) => h.implied_rate(curve),
            RateHelper::Swap(h) => h.implied_rate(curve),
        }
    }

    /// Value of one unit of rate: `τ·P(e)` for deposits and FRAs, the
    /// fixed-leg annuity for swaps.
    pub fn annuity(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        match self {
            RateHelper::Deposit(h) => h.annuity(curve),
            RateHelper::Fra(h) => h.annuity(curve),
            RateHelper::Ois(h) => h.annuity(curve),
            RateHelper::Swap(h) => h.annuity(curve),
        }
    }

    /// Present value per unit notional of receiving the quote against the
    /// implied rate: `(quote - implied)·annuity`.
    pub fn npv(&self, curve: &dyn YieldTermStructure) -> Result<Real> {
        Ok((self.quoted_rate() - self.implied_rate(curve)?) * self.annuity(curve)?)
    }
}

impl From<DepositRateHelper> for RateHelper {
    fn from(h: DepositRateHelper) -> Self {
        RateHelper::Deposit(h)
    }
}

impl From<FraRateHelper> for RateHelper {
    fn from(h: FraRateHelper) -> Self {
        RateHelper::Fra(h)
    }
}

impl From<OisRateHelper> for RateHelper {
    fn from(h: OisRateHelper) -> Self {
        RateHelper::Ois(h)
    }
}

impl From<SwapRateHelper> for RateHelper {
    fn from(h: SwapRateHelper) -> Self {
        RateHelper::Swap(h)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use yc_indexes::{estr, stibor};
    use yc_termstructures::FlatForward;
    use yc_time::{Actual360, Actual365Fixed};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn today() -> Date {
        date(2025, 1, 2)
    }

    fn flat(rate: Rate) -> FlatForward {
        FlatForward::continuous(today(), rate, Arc::new(Actual365Fixed))
    }

    #[test]
    fn deposit_implied_equals_simple_forward_on_flat_curve() {
        let mat = date(2025, 4, 2);
        let helper = DepositRateHelper::new(0.0, today(), mat, Arc::new(Actual360), today()).unwrap();
        let implied = helper.implied_rate(&flat(0.05)).unwrap();
        let tau = Actual360.year_fraction(today(), mat);
        let t = Actual365Fixed.year_fraction(today(), mat);
        assert_abs_diff_eq!(implied, ((0.05 * t).exp() - 1.0) / tau, epsilon = 1e-12);
    }

    #[test]
    fn construction_rejects_pillar_not_after_reference() {
        let err = DepositRateHelper::new(0.01, today(), today(), Arc::new(Actual360), today()).unwrap_err();
        assert!(err.is_configuration());
        let err = FraRateHelper::new(0.01, date(2024, 12, 1), date(2025, 3, 1), Arc::new(Actual360), today())
            .unwrap_err();
        assert!(err.is_configuration());
        let err = FraRateHelper::new(0.01, date(2025, 6, 2), date(2025, 3, 3), Arc::new(Actual360), today())
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn fra_dates_follow_index_conventions() {
        let index = stibor(Period::new(3, TimeUnit::Months), RelinkableHandle::empty()).unwrap();
        let fra = FraRateHelper::from_index(0.03, 3, &index, today()).unwrap();
        assert_eq!(fra.label, "FRA 3x6");
        assert_eq!(fra.start, date(2025, 4, 2));
        assert_eq!(fra.maturity, date(2025, 7, 2));
    }

    #[test]
    fn ois_schedule_is_annual_backward() {
        let index = estr(RelinkableHandle::empty());
        let ois = OisRateHelper::from_tenor(0.03, 2, "18M".parse().unwrap(), &index, today()).unwrap();
        let dates = ois.schedule().dates();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[0], date(2025, 1, 6));
        assert_eq!(dates[2], date(2026, 7, 6));
        // front stub of six months
        assert_eq!(dates[1], date(2025, 7, 7));
    }

    #[test]
    fn swap_par_rate_zeroes_npv() {
        let index = stibor(Period::new(3, TimeUnit::Months), RelinkableHandle::empty()).unwrap();
        let curve = flat(0.03);
        let five_years = Period::new(5, TimeUnit::Years);
        let at_zero = SwapRateHelper::from_index(0.0, five_years, FixedLegConventions::default(), &index, today()).unwrap();
        let par = RateHelper::from(at_zero).implied_rate(&curve).unwrap();
        let helper: RateHelper = SwapRateHelper::from_index(par, five_years, FixedLegConventions::default(), &index, today())
            .unwrap()
            .into();
        assert_abs_diff_eq!(helper.npv(&curve).unwrap(), 0.0, epsilon = 1e-14);
        assert!(helper.annuity(&curve).unwrap() > 4.0);
    }

    #[test]
    fn dual_curve_reduces_to_single_curve_on_same_curve() {
        let index = estr(RelinkableHandle::empty());
        let curve: Arc<dyn YieldTermStructure> = Arc::new(flat(0.025));
        let single: RateHelper = OisRateHelper::from_tenor(0.0, 2, Period::new(3, TimeUnit::Years), &index, today())
            .unwrap()
            .into();
        let handle = RelinkableHandle::from_arc(Arc::clone(&curve));
        let dual: RateHelper = OisRateHelper::from_tenor(0.0, 2, Period::new(3, TimeUnit::Years), &index, today())
            .unwrap()
            .with_discount_curve(handle.clone())
            .into();
        let a = single.implied_rate(curve.as_ref()).unwrap();
        let b = dual.implied_rate(curve.as_ref()).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-14);

        handle.unlink();
        assert!(matches!(dual.implied_rate(curve.as_ref()), Err(Error::EmptyHandle(_))));
    }

    #[test]
    fn instrument_tags_parse() {
        assert_eq!("deposit".parse::<InstrumentKind>().unwrap(), InstrumentKind::Deposit);
        assert_eq!(" SWAP ".parse::<InstrumentKind>().unwrap(), InstrumentKind::Swap);
        assert!("BOND".parse::<InstrumentKind>().unwrap_err().is_configuration());
        assert_eq!(InstrumentKind::Ois.to_string(), "OIS");
    }
}
