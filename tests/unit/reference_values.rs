use bsm_rs::prelude::*;

const TOLERANCE: f64 = 1e-3;

fn reference_contract(kind: &str) -> OptionContract {
    OptionContract::new(100.0, 100.0, 0.05, 1.0, kind, Some(0.2), None).unwrap()
}

#[test]
fn test_reference_call() {
    let model = OptionModel::new();
    let mut call = reference_contract("call");

    let price = model.price(&mut call).unwrap();
    let greeks = model.greeks(&mut call).unwrap();

    assert!((price - 10.4506).abs() < TOLERANCE, "price {price}");
    assert!((greeks.delta - 0.6368).abs() < TOLERANCE, "delta {}", greeks.delta);
    assert!((greeks.gamma - 0.0188).abs() < TOLERANCE, "gamma {}", greeks.gamma);
    assert!((greeks.vega - 0.3752).abs() < TOLERANCE, "vega {}", greeks.vega);
    assert!((greeks.theta + 0.0176).abs() < TOLERANCE, "theta {}", greeks.theta);
    assert!((greeks.rho - 0.5323).abs() < TOLERANCE, "rho {}", greeks.rho);
}

#[test]
fn test_reference_call_with_erf_approximation() {
    let model = OptionModel::with_distribution(ErfApproximation);
    let mut call = reference_contract("call");

    assert!((model.price(&mut call).unwrap() - 10.4506).abs() < TOLERANCE);
    assert!((model.delta(&mut call).unwrap() - 0.6368).abs() < TOLERANCE);
}

#[test]
fn test_missing_input() {
    let result = OptionContract::new(100.0, 100.0, 0.05, 1.0, "call", None, None);
    assert_eq!(result.unwrap_err(), OptionModelError::MissingInput);
}

#[test]
fn test_straddle_price_fails_gamma_succeeds() {
    let model = OptionModel::new();
    let mut straddle = reference_contract("straddle");

    let err = model.price(&mut straddle).unwrap_err();
    assert_eq!(
        err,
        OptionModelError::InvalidOptionType {
            kind: "straddle".to_string()
        }
    );

    let gamma = model.gamma(&mut straddle).unwrap();
    assert!((gamma - 0.0188).abs() < TOLERANCE);
}

#[test]
fn test_delta_limits() {
    let model = OptionModel::new();

    let mut deep_itm = OptionContract::with_volatility(100_000.0, 100.0, 0.05, 1.0, "call", 0.2);
    assert!(model.delta(&mut deep_itm).unwrap() > 1.0 - 1e-9);

    let mut deep_otm = OptionContract::with_volatility(0.1, 100.0, 0.05, 1.0, "call", 0.2);
    assert!(model.delta(&mut deep_otm).unwrap() < 1e-9);
}

#[test]
fn test_moneyness_of_contracts() {
    let itm_put = OptionContract::with_volatility(90.0, 100.0, 0.05, 1.0, "put", 0.2);
    assert_eq!(itm_put.moneyness(), Some(Moneyness::InTheMoney));
    assert_eq!(itm_put.intrinsic_value(), Some(10.0));

    let atm_call = reference_contract("call");
    assert_eq!(atm_call.moneyness(), Some(Moneyness::AtTheMoney));
}
