//! End-to-end bootstrap scenarios over mixed instrument sets.

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use yc_bootstrap::{
    BootstrapConfig, DepositRateHelper, FixedLegConventions, FraRateHelper, InstrumentKind, OisRateHelper, PiecewiseYieldCurve,
    RateHelper, SwapRateHelper,
};
use yc_core::{Compounding, Error, RelinkableHandle};
use yc_indexes::{estr, stibor, IborIndex, OvernightIndex};
use yc_termstructures::{FlatForward, Interpolation, TermStructure, YieldTermStructure};
use yc_time::{Actual360, Actual365Fixed, Date, DayCounter, Frequency, Period, TimeUnit};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn today() -> Date {
    date(2025, 1, 2)
}

fn months(n: i32) -> Period {
    Period::new(n, TimeUnit::Months)
}

fn years(n: i32) -> Period {
    Period::new(n, TimeUnit::Years)
}

fn stibor_3m() -> IborIndex {
    stibor(months(3), RelinkableHandle::empty()).unwrap()
}

fn estr_index() -> OvernightIndex {
    estr(RelinkableHandle::empty())
}

/// Deposits, FRAs, OIS and swaps with distinct pillars out to five years.
fn market() -> Vec<RateHelper> {
    let ibor = stibor_3m();
    let on = estr_index();
    let fixed = FixedLegConventions::default();
    vec![
        DepositRateHelper::from_index(0.0210, months(1), &ibor, today()).unwrap().into(),
        DepositRateHelper::from_index(0.0225, months(3), &ibor, today()).unwrap().into(),
        FraRateHelper::from_index(0.0240, 3, &ibor, today()).unwrap().into(),
        FraRateHelper::from_index(0.0250, 6, &ibor, today()).unwrap().into(),
        SwapRateHelper::from_index(0.0260, years(1), fixed, &ibor, today()).unwrap().into(),
        OisRateHelper::from_tenor(0.0245, 2, months(18), &on, today()).unwrap().into(),
        SwapRateHelper::from_index(0.0285, years(2), fixed, &ibor, today()).unwrap().into(),
        SwapRateHelper::from_index(0.0300, years(3), fixed, &ibor, today()).unwrap().into(),
        OisRateHelper::from_tenor(0.0290, 2, years(4), &on, today()).unwrap().into(),
        SwapRateHelper::from_index(0.0320, years(5), fixed, &ibor, today()).unwrap().into(),
    ]
}

fn bootstrap(helpers: Vec<RateHelper>, interpolation: Interpolation) -> PiecewiseYieldCurve {
    PiecewiseYieldCurve::new(today(), helpers, Arc::new(Actual365Fixed), interpolation).unwrap()
}

#[test]
fn every_helper_reprices_under_every_strategy() {
    let kinds: Vec<InstrumentKind> = market().iter().map(RateHelper::kind).collect();
    for kind in [InstrumentKind::Deposit, InstrumentKind::Fra, InstrumentKind::Ois, InstrumentKind::Swap] {
        assert!(kinds.contains(&kind));
    }

    for interpolation in Interpolation::ALL {
        let curve = bootstrap(market(), interpolation);
        for helper in curve.helpers() {
            let implied = helper.implied_rate(&curve).unwrap();
            assert!(
                (implied - helper.quoted_rate()).abs() < 1e-10,
                "{interpolation} {}: implied {implied} vs quote {}",
                helper.label(),
                helper.quoted_rate()
            );
            assert!(helper.npv(&curve).unwrap().abs() < 1e-9);
        }
        if interpolation.is_global() {
            assert!(curve.sweeps() >= 1);
        } else {
            assert_eq!(curve.sweeps(), 0);
        }
    }
}

#[test]
fn discount_at_reference_is_exactly_one() {
    for interpolation in Interpolation::ALL {
        let curve = bootstrap(market(), interpolation);
        assert_eq!(curve.discount(today()).unwrap(), 1.0);
    }
}

#[test]
fn one_year_ois_matches_flat_forward() {
    let reference = date(2024, 1, 2);
    let end = date(2024, 12, 27);
    let helper = OisRateHelper::from_dates(0.05, reference, end, &estr_index(), reference).unwrap();
    assert_eq!(helper.schedule().len(), 2);

    let curve = PiecewiseYieldCurve::new(reference, vec![helper.into()], Arc::new(Actual360), Interpolation::FlatForward)
        .unwrap();
    assert_abs_diff_eq!(curve.discount(end).unwrap(), 1.0 / 1.05, epsilon = 1e-11);

    let z = curve
        .zero_rate(end, Arc::new(Actual360), Compounding::Compounded, Frequency::Annual)
        .unwrap();
    assert_abs_diff_eq!(z.rate(), 0.05, epsilon = 1e-10);
}

#[test]
fn one_year_ois_from_tenor_discounts_over_its_accrual() {
    let reference = date(2024, 3, 5);
    let index = estr_index();
    let spot = OisRateHelper::from_tenor(0.05, 0, years(1), &index, reference).unwrap();
    let end = spot.schedule().end_date();
    assert_eq!(end, date(2025, 3, 5));
    assert_eq!(spot.schedule().len(), 2);

    let tau = Actual360.year_fraction(reference, end);
    let curve = PiecewiseYieldCurve::new(reference, vec![spot.into()], Arc::new(Actual360), Interpolation::FlatForward)
        .unwrap();
    assert_abs_diff_eq!(curve.discount(end).unwrap(), 1.0 / (1.0 + 0.05 * tau), epsilon = 1e-11);
    assert_abs_diff_eq!(curve.helpers()[0].implied_rate(&curve).unwrap(), 0.05, epsilon = 1e-12);

    // settling two days later, the quote fixes the ratio over the accrual period
    let lagged = OisRateHelper::from_tenor(0.05, 2, years(1), &index, date(2024, 3, 1)).unwrap();
    let (start, end) = (lagged.schedule().start_date(), lagged.schedule().end_date());
    assert_eq!((start, end), (date(2024, 3, 5), date(2025, 3, 5)));
    let curve = PiecewiseYieldCurve::new(
        date(2024, 3, 1),
        vec![lagged.into()],
        Arc::new(Actual360),
        Interpolation::FlatForward,
    )
    .unwrap();
    let ratio = curve.discount(end).unwrap() / curve.discount(start).unwrap();
    assert_abs_diff_eq!(ratio, 1.0 / (1.0 + 0.05 * tau), epsilon = 1e-11);
}

#[test]
fn global_sweeps_past_the_limit_are_a_calibration_error() {
    let config = BootstrapConfig {
        max_sweeps: 1,
        ..BootstrapConfig::default()
    };
    let labels: Vec<String> = market().iter().map(|h| h.label().to_string()).collect();
    for interpolation in [Interpolation::CubicZero, Interpolation::LogCubicDiscount] {
        let err = PiecewiseYieldCurve::with_config(today(), market(), Arc::new(Actual365Fixed), interpolation, config)
            .unwrap_err();
        match err {
            Error::Calibration {
                ref helper,
                ref pillar,
                residual,
                ref reason,
            } => {
                assert!(labels.contains(helper), "{helper}");
                let expected = market().into_iter().find(|h| h.label() == helper.as_str()).unwrap().pillar_date();
                assert_eq!(pillar, &expected.to_string());
                assert!(residual.is_finite());
                assert!(reason.contains("did not converge after 1"), "{reason}");
            }
            other => panic!("{interpolation}: expected a calibration error, got {other}"),
        }
    }

    let converged =
        PiecewiseYieldCurve::with_config(today(), market(), Arc::new(Actual365Fixed), Interpolation::CubicZero, BootstrapConfig::default())
            .unwrap();
    assert!(converged.sweeps() > 1);
}

#[test]
fn linear_zero_between_deposit_and_swap_is_monotone() {
    let ibor = stibor_3m();
    let deposit = DepositRateHelper::from_index(0.02, months(1), &ibor, today()).unwrap();
    let swap = SwapRateHelper::from_index(0.03, years(1), FixedLegConventions::default(), &ibor, today()).unwrap();
    let curve = bootstrap(vec![swap.into(), deposit.into()], Interpolation::LinearZero);

    let zero = |d: Date| {
        curve
            .zero_rate(d, Arc::new(Actual365Fixed), Compounding::Continuous, Frequency::Annual)
            .unwrap()
            .rate()
    };
    let short = zero(curve.dates()[1]);
    let long = zero(curve.dates()[2]);
    let mid = zero(date(2025, 7, 2));
    assert!(short < mid && mid < long, "{short} < {mid} < {long}");
}

#[test]
fn shared_pillar_is_a_configuration_error() {
    let ibor = stibor_3m();
    let deposit = DepositRateHelper::from_index(0.02, months(6), &ibor, today()).unwrap();
    let fra = FraRateHelper::from_index(0.025, 3, &ibor, today()).unwrap();
    let err = PiecewiseYieldCurve::new(
        today(),
        vec![deposit.into(), fra.into()],
        Arc::new(Actual365Fixed),
        Interpolation::LinearZero,
    )
    .unwrap_err();
    assert!(err.is_configuration());
    let message = err.to_string();
    assert!(message.contains("DEPOSIT 6M") && message.contains("FRA 3x6"), "{message}");
}

#[test]
fn unreachable_quote_is_a_calibration_error() {
    let mut helpers = market();
    helpers.push(
        DepositRateHelper::new(-20.0, today(), date(2025, 1, 16), Arc::new(Actual360), today())
            .unwrap()
            .into(),
    );
    for interpolation in [Interpolation::LinearZero, Interpolation::LogCubicDiscount] {
        let err = PiecewiseYieldCurve::new(today(), helpers.clone(), Arc::new(Actual365Fixed), interpolation)
            .unwrap_err();
        assert!(matches!(err, Error::Calibration { ref pillar, .. } if pillar == "2025-01-16"), "{err}");
    }
}

#[test]
fn queries_beyond_last_pillar_need_extrapolation() {
    let curve = bootstrap(market(), Interpolation::CubicZero);
    let beyond = curve.max_date().add_days(30).unwrap();
    assert!(curve.discount(beyond).unwrap_err().is_out_of_range());
    assert!(curve.discount(today().add_days(-1).unwrap()).unwrap_err().is_out_of_range());

    curve.enable_extrapolation();
    assert!(curve.allows_extrapolation());
    let df = curve.discount(beyond).unwrap();
    assert!(df > 0.0 && df < curve.discount(curve.max_date()).unwrap());

    curve.disable_extrapolation();
    assert!(curve.discount(beyond).is_err());
    assert!(curve.discount(curve.max_date()).is_ok());
}

#[test]
fn ibor_swaps_bootstrap_against_external_discount_curve() {
    let ibor = stibor_3m();
    let discounting: Arc<dyn YieldTermStructure> =
        Arc::new(FlatForward::continuous(today(), 0.02, Arc::new(Actual365Fixed)));
    let handle = RelinkableHandle::from_arc(discounting);
    let helpers: Vec<RateHelper> = [1, 2, 3, 5]
        .into_iter()
        .map(|n| {
            SwapRateHelper::from_index(0.025 + 0.001 * n as f64, years(n), FixedLegConventions::default(), &ibor, today())
                .unwrap()
                .with_discount_curve(handle.clone())
                .into()
        })
        .collect();

    let curve = bootstrap(helpers, Interpolation::LogLinearDiscount);
    for helper in curve.helpers() {
        assert_abs_diff_eq!(helper.implied_rate(&curve).unwrap(), helper.quoted_rate(), epsilon = 1e-10);
    }
    // forwards above the discount rate: the projection curve sits below it
    let five_years = curve.max_date();
    assert!(curve.discount(five_years).unwrap() < (-0.02 * Actual365Fixed.year_fraction(today(), five_years)).exp());
}

#[test]
fn negative_rates_bootstrap() {
    let ibor = stibor_3m();
    let helpers: Vec<RateHelper> = vec![
        DepositRateHelper::from_index(-0.0050, months(3), &ibor, today()).unwrap().into(),
        SwapRateHelper::from_index(-0.0030, years(2), FixedLegConventions::default(), &ibor, today())
            .unwrap()
            .into(),
    ];
    let curve = bootstrap(helpers, Interpolation::FlatForward);
    assert!(curve.discount(curve.max_date()).unwrap() > 1.0);
}

fn strategy() -> impl Strategy<Value = Interpolation> {
    proptest::sample::select(Interpolation::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn input_order_does_not_change_the_curve(
        shuffled in Just(market()).prop_shuffle(),
        interpolation in strategy(),
    ) {
        let reference = bootstrap(market(), interpolation);
        let curve = bootstrap(shuffled, interpolation);
        prop_assert_eq!(curve.nodes(), reference.nodes());
        let labels: Vec<&str> = curve.helpers().iter().map(RateHelper::label).collect();
        let expected: Vec<&str> = reference.helpers().iter().map(RateHelper::label).collect();
        prop_assert_eq!(labels, expected);
    }
}
