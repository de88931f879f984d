use bsm_rs::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_pricer(c: &mut Criterion) {
    let pricer = BlackScholes::<StatrsNormal>::default();
    let inputs = MarketTerms::new(100.0, 105.0, 0.05, 0.5).at_volatility(0.25);

    c.bench_function("black_scholes_price_call", |b| {
        b.iter(|| pricer.price(black_box(&inputs), black_box(&OptionKind::Call)))
    });

    c.bench_function("black_scholes_greeks_put", |b| {
        b.iter(|| pricer.greeks(black_box(&inputs), black_box(&OptionKind::Put)))
    });

    let approx = BlackScholes::new(ErfApproximation);
    c.bench_function("black_scholes_price_call_erf_approximation", |b| {
        b.iter(|| approx.price(black_box(&inputs), black_box(&OptionKind::Call)))
    });
}

fn bench_solver(c: &mut Criterion) {
    let pricer = BlackScholes::<StatrsNormal>::default();
    let terms = MarketTerms::new(100.0, 100.0, 0.05, 1.0);
    let config = SolverConfig::default();

    c.bench_function("solve_iv_100_steps", |b| {
        b.iter(|| {
            solve_iv(
                &pricer,
                black_box(&terms),
                &OptionKind::Call,
                black_box(10.4506),
                &config,
            )
        })
    });

    let model = OptionModel::new();
    c.bench_function("option_model_lazy_delta", |b| {
        b.iter(|| {
            let mut contract =
                OptionContract::with_market_price(100.0, 100.0, 0.05, 1.0, "call", 10.4506);
            model.delta(black_box(&mut contract))
        })
    });
}

criterion_group!(benches, bench_pricer, bench_solver);
criterion_main!(benches);
