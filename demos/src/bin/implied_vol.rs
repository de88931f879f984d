//! Recovers implied volatility from a strip of quoted call prices.
//!
//! An optional solver configuration can be passed as a JSON argument, e.g.
//! `implied_vol '{"initial_guess":0.3,"iterations":25}'`.

use bsm_rs::prelude::*;
use tracing::{error, info, warn};

fn main() {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(arg) => match serde_json::from_str::<SolverConfig>(&arg) {
            Ok(config) => config,
            Err(e) => {
                error!("Invalid solver configuration {}: {}", arg, e);
                return;
            }
        },
        None => SolverConfig::default(),
    };
    info!("Solver configuration: {:?}", config);

    let model = OptionModel::new().with_solver_config(config);
    let quotes = [(90.0, 14.2), (95.0, 10.9), (100.0, 8.1), (105.0, 5.8), (110.0, 4.0)];

    for (strike, quote) in quotes {
        let mut contract =
            OptionContract::with_market_price(100.0, strike, 0.03, 0.5, "call", quote);

        match model.implied_volatility(&mut contract) {
            Ok(iv) if iv.is_finite() => {
                let delta = model.delta(&mut contract).unwrap_or(f64::NAN);
                let residual = solve_iv(
                    model.pricer(),
                    &contract.terms(),
                    contract.kind(),
                    quote,
                    model.solver_config(),
                )
                .map(|report| report.residual)
                .unwrap_or(f64::NAN);
                info!(
                    "K={:>6.1} quote={:>6.2} iv={:>6.2}% delta={:.4} residual={:.2e}",
                    strike,
                    quote,
                    iv * 100.0,
                    delta,
                    residual
                );
            }
            Ok(iv) => warn!("K={} quote={}: solver ended at {}", strike, quote, iv),
            Err(e) => error!("K={} quote={}: {}", strike, quote, e),
        }
    }
}
