//! Black-Scholes-Merton pricing and implied volatility for European options.
//!
//! # Overview
//!
//! - [`BlackScholes`] evaluates the closed-form price and the Greeks
//!   (delta, gamma, theta, vega, rho) for fully specified inputs.
//! - [`solve_iv`] inverts the price with a fixed number of Newton-Raphson
//!   steps, using the pricer's vega as the derivative.
//! - [`OptionModel`] applies both to an [`OptionContract`], solving for the
//!   volatility or computing the market price on first use and caching the
//!   result on the contract.
//!
//! # Example
//!
//! ```
//! use bsm_rs::pricing::{OptionContract, OptionModel};
//!
//! let model = OptionModel::new();
//!
//! let mut quoted = OptionContract::with_volatility(100.0, 100.0, 0.05, 1.0, "call", 0.2);
//! let price = model.price(&mut quoted)?;
//! assert!((price - 10.4506).abs() < 1e-3);
//!
//! let mut observed = OptionContract::with_market_price(100.0, 100.0, 0.05, 1.0, "call", price);
//! let delta = model.delta(&mut observed)?;
//! assert!((observed.volatility().unwrap_or_default() - 0.2).abs() < 1e-6);
//! assert!((delta - 0.6368).abs() < 1e-3);
//! # Ok::<(), bsm_rs::pricing::OptionModelError>(())
//! ```

mod black_scholes;
mod contract;
mod error;
mod model;
mod normal;
mod solver;
mod types;
mod valuation;

pub use black_scholes::BlackScholes;
pub use contract::OptionContract;
pub use error::OptionModelError;
pub use model::OptionModel;
pub use normal::{ErfApproximation, NormalDistribution, StatrsNormal};
pub use solver::{SolveReport, SolverConfig, solve_iv};
pub use types::{BlackScholesInputs, DTerms, Greeks, MarketTerms, Moneyness, OptionKind};
pub use valuation::Valuation;
