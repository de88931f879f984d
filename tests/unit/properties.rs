use bsm_rs::prelude::*;
use proptest::prelude::*;

fn pricer() -> BlackScholes<StatrsNormal> {
    BlackScholes::default()
}

fn near_the_money() -> impl Strategy<Value = (MarketTerms, f64)> {
    (
        50.0..200.0f64,
        0.95..1.05f64,
        0.0..0.1f64,
        0.1..3.0f64,
        0.1..1.0f64,
    )
        .prop_map(|(spot, ratio, rate, maturity, vol)| {
            (MarketTerms::new(spot, spot * ratio, rate, maturity), vol)
        })
}

fn moderate_moneyness() -> impl Strategy<Value = (MarketTerms, f64)> {
    (
        50.0..200.0f64,
        0.8..1.25f64,
        0.0..0.1f64,
        0.25..2.0f64,
        0.1..0.8f64,
    )
        .prop_map(|(spot, ratio, rate, maturity, vol)| {
            (MarketTerms::new(spot, spot * ratio, rate, maturity), vol)
        })
}

fn kind_strategy() -> impl Strategy<Value = OptionKind> {
    prop_oneof![Just(OptionKind::Call), Just(OptionKind::Put)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_put_call_parity((terms, vol) in moderate_moneyness()) {
        let inputs = terms.at_volatility(vol);
        let call = pricer().price(&inputs, &OptionKind::Call).unwrap();
        let put = pricer().price(&inputs, &OptionKind::Put).unwrap();

        let forward_diff = terms.spot - terms.strike * (-terms.rate * terms.maturity).exp();
        let scale = terms.spot.max(terms.strike);
        prop_assert!(
            (call - put - forward_diff).abs() <= 1e-8 * scale,
            "call {} put {} expected diff {}", call, put, forward_diff
        );
    }

    #[test]
    fn test_implied_volatility_round_trip(
        (terms, vol) in near_the_money(),
        kind in kind_strategy(),
    ) {
        let model = OptionModel::new();
        let mut quoted = OptionContract::with_volatility(
            terms.spot, terms.strike, terms.rate, terms.maturity, kind.clone(), vol,
        );
        let price = model.price(&mut quoted).unwrap();

        let mut observed = OptionContract::with_market_price(
            terms.spot, terms.strike, terms.rate, terms.maturity, kind, price,
        );
        let iv = model.implied_volatility(&mut observed).unwrap();
        prop_assert!((iv - vol).abs() < 1e-4, "recovered {} for {}", iv, vol);
    }

    #[test]
    fn test_price_increasing_in_volatility(
        (terms, vol) in moderate_moneyness(),
        kind in kind_strategy(),
    ) {
        let lower = pricer().price(&terms.at_volatility(vol), &kind).unwrap();
        let higher = pricer().price(&terms.at_volatility(vol + 0.05), &kind).unwrap();
        prop_assert!(higher > lower, "{} -> {} at vol {}", lower, higher, vol);
        prop_assert!(pricer().vega(&terms.at_volatility(vol)) > 0.0);
    }

    #[test]
    fn test_put_delta_is_call_delta_minus_one((terms, vol) in moderate_moneyness()) {
        let inputs = terms.at_volatility(vol);
        let call = pricer().delta(&inputs, &OptionKind::Call).unwrap();
        let put = pricer().delta(&inputs, &OptionKind::Put).unwrap();
        prop_assert!((put - (call - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_gamma_and_vega_shared_by_calls_and_puts((terms, vol) in moderate_moneyness()) {
        let inputs = terms.at_volatility(vol);
        let call = pricer().greeks(&inputs, &OptionKind::Call).unwrap();
        let put = pricer().greeks(&inputs, &OptionKind::Put).unwrap();
        prop_assert_eq!(call.gamma, put.gamma);
        prop_assert_eq!(call.vega, put.vega);
    }

    #[test]
    fn test_theta_call_minus_put_is_discounted_carry((terms, vol) in moderate_moneyness()) {
        let inputs = terms.at_volatility(vol);
        let call = pricer().theta(&inputs, &OptionKind::Call).unwrap();
        let put = pricer().theta(&inputs, &OptionKind::Put).unwrap();

        let carry = terms.rate * terms.strike * (-terms.rate * terms.maturity).exp() / 365.0;
        prop_assert!(
            (call - put + carry).abs() < 1e-10,
            "call theta {} put theta {} carry {}", call, put, carry
        );
    }
}
