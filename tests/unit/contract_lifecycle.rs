use bsm_rs::prelude::*;

#[test]
fn test_market_price_contract_solves_once() {
    let model = OptionModel::new();
    let mut contract = OptionContract::with_market_price(100.0, 105.0, 0.03, 0.5, "put", 8.0);

    let first = model.vega(&mut contract).unwrap();
    let solved = contract.volatility().unwrap();
    assert!(contract.is_resolved());

    let second = model.vega(&mut contract).unwrap();
    assert_eq!(first, second);
    assert_eq!(contract.volatility(), Some(solved));

    // The model price at the solved volatility reproduces the quote.
    let price = model.price(&mut contract).unwrap();
    assert!((price - 8.0).abs() < 1e-8);
    assert_eq!(contract.market_price(), Some(8.0));
}

#[test]
fn test_implied_volatility_caches_solution() {
    let model = OptionModel::new();
    let mut contract = OptionContract::with_market_price(100.0, 100.0, 0.05, 1.0, "call", 10.0);

    let iv = model.implied_volatility(&mut contract).unwrap();
    assert_eq!(contract.volatility(), Some(iv));

    let d1 = model.d1(&mut contract).unwrap();
    let expected = (0.05 + iv * iv / 2.0) / iv;
    assert!((d1 - expected).abs() < 1e-12);
}

#[test]
fn test_divergent_solve_is_returned_not_raised() {
    let model = OptionModel::new();
    // No volatility can make a call worth more than the underlying.
    let mut contract = OptionContract::with_market_price(100.0, 100.0, 0.05, 1.0, "call", 120.0);

    let iv = model.implied_volatility(&mut contract).unwrap();
    assert!(!iv.is_finite() || iv > 1.0);
    assert_eq!(contract.volatility().map(f64::to_bits), Some(iv.to_bits()));
}

#[test]
fn test_custom_solver_configuration() {
    let config = SolverConfig::new().with_initial_guess(0.25).with_iterations(20);
    let model = OptionModel::new().with_solver_config(config);
    let mut contract = OptionContract::with_market_price(100.0, 100.0, 0.05, 1.0, "call", 10.4506);

    let gamma = model.gamma(&mut contract).unwrap();
    assert!((contract.volatility().unwrap() - 0.2).abs() < 1e-4);
    assert!((gamma - 0.0188).abs() < 1e-3);
}

#[test]
fn test_valuation_json_round_trip() {
    let model = OptionModel::new();
    let mut contract = OptionContract::with_market_price(100.0, 100.0, 0.05, 1.0, "put", 5.5735);

    let valuation = model.valuation(&mut contract).unwrap();
    assert!((valuation.volatility - 0.2).abs() < 1e-4);
    assert!(valuation.contract.is_resolved());

    let json = valuation.to_json().unwrap();
    let restored = Valuation::from_json(&json).unwrap();
    assert_eq!(restored, valuation);
}

#[test]
fn test_contract_json_without_volatility_or_price_is_rejected() {
    let json = r#"{"spot":100.0,"strike":100.0,"rate":0.05,"maturity":1.0,"kind":"call","volatility":null,"market_price":null}"#;
    assert!(serde_json::from_str::<OptionContract>(json).is_err());
}
