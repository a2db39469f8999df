//! Criterion benchmarks for bootstrapping a 20-pillar swap curve under each
//! interpolation strategy.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yc_bootstrap::{DepositRateHelper, FixedLegConventions, PiecewiseYieldCurve, RateHelper, SwapRateHelper};
use yc_core::RelinkableHandle;
use yc_indexes::stibor;
use yc_termstructures::Interpolation;
use yc_time::{Actual365Fixed, Date, Period, TimeUnit};

fn market(today: Date) -> Vec<RateHelper> {
    let index = stibor(Period::new(3, TimeUnit::Months), RelinkableHandle::empty()).unwrap();
    let mut helpers: Vec<RateHelper> = [1, 3, 6]
        .into_iter()
        .map(|m| {
            DepositRateHelper::from_index(0.02 + 0.0005 * m as f64, Period::new(m, TimeUnit::Months), &index, today)
                .unwrap()
                .into()
        })
        .collect();
    helpers.extend((1..=17).map(|y| {
        RateHelper::from(
            SwapRateHelper::from_index(
                0.025 + 0.01 * (1.0 - (-(y as f64) / 6.0).exp()),
                Period::new(y, TimeUnit::Years),
                FixedLegConventions::default(),
                &index,
                today,
            )
            .unwrap(),
        )
    }));
    helpers
}

fn bench_bootstrap(c: &mut Criterion) {
    let today = Date::from_ymd(2025, 1, 2).unwrap();
    let helpers = market(today);
    let mut group = c.benchmark_group("bootstrap_20");
    for interpolation in Interpolation::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(interpolation), &interpolation, |b, &interp| {
            b.iter(|| {
                PiecewiseYieldCurve::new(today, black_box(helpers.clone()), Arc::new(Actual365Fixed), interp).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bootstrap);
criterion_main!(benches);
