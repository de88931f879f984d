//! Prices a call and a put with known volatility and prints their Greeks.
//!
//! Run with `RUST_LOG` unset; the subscriber logs at DEBUG so the lazy
//! market price resolution is visible.

use bsm_rs::prelude::*;
use tracing::{error, info, warn};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let model = OptionModel::new();

    for kind in ["call", "put", "straddle"] {
        let mut contract = OptionContract::with_volatility(100.0, 100.0, 0.05, 1.0, kind, 0.2);

        if !contract.kind().is_supported() {
            warn!("{} is not a call or a put; only kind-free Greeks apply", kind);
            match (model.gamma(&mut contract), model.vega(&mut contract)) {
                (Ok(gamma), Ok(vega)) => info!("{}: gamma={:.4} vega={:.4}", kind, gamma, vega),
                (Err(e), _) | (_, Err(e)) => error!("Failed to value {} contract: {}", kind, e),
            }
            continue;
        }

        match model.valuation(&mut contract) {
            Ok(valuation) => {
                info!(
                    "{}: price={:.4} delta={:.4} gamma={:.4} theta={:.4} vega={:.4} rho={:.4}",
                    kind,
                    valuation.price,
                    valuation.greeks.delta,
                    valuation.greeks.gamma,
                    valuation.greeks.theta,
                    valuation.greeks.vega,
                    valuation.greeks.rho
                );
                match valuation.to_json() {
                    Ok(json) => info!("{}", json),
                    Err(e) => error!("Failed to serialize valuation: {}", e),
                }
            }
            Err(e) => error!("Failed to value {} contract: {}", kind, e),
        }
    }
}
