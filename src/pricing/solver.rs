//! Newton-Raphson solver for implied volatility.
//!
//! The solver performs a fixed number of steps
//! σ_{n+1} = σ_n − (BS(σ_n) − market_price) / (vega(σ_n) · 100)
//! and returns whatever value the last step produced. There is no
//! convergence test, no clamping and no fallback method: a collapsing vega
//! (deep out of the money, near expiry) or a poor initial guess can yield a
//! divergent or `NaN` volatility, which is returned as-is.

use super::black_scholes::BlackScholes;
use super::error::OptionModelError;
use super::normal::NormalDistribution;
use super::types::{MarketTerms, OptionKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Converts vega per volatility point back to the per-unit derivative.
const VEGA_TO_UNIT: f64 = 100.0;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Starting volatility (default: 0.5 = 50%).
    pub initial_guess: f64,
    /// Exact number of Newton steps performed (default: 100).
    pub iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.5,
            iterations: 100,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial volatility guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the number of iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Volatility after the last step.
    pub volatility: f64,
    /// Number of steps performed; always the configured count.
    pub iterations: u32,
    /// Model price at `volatility` minus the market price.
    pub residual: f64,
}

/// Solves for the volatility that reproduces `market_price`.
///
/// # Arguments
/// - `pricer`: Black-Scholes pricer used for price and vega
/// - `terms`: Spot, strike, rate and maturity of the option
/// - `kind`: Call or put
/// - `market_price`: Observed price to match
/// - `config`: Initial guess and iteration count
///
/// # Errors
/// [`OptionModelError::InvalidOptionType`] if `kind` cannot be priced.
/// Non-convergence is not an error.
///
/// # Example
/// ```
/// use bsm_rs::prelude::*;
///
/// let pricer = BlackScholes::<StatrsNormal>::default();
/// let terms = MarketTerms::new(100.0, 100.0, 0.05, 1.0);
/// let report = solve_iv(&pricer, &terms, &OptionKind::Call, 10.4506, &SolverConfig::default())?;
/// assert!((report.volatility - 0.2).abs() < 1e-4);
/// # Ok::<(), OptionModelError>(())
/// ```
pub fn solve_iv<N: NormalDistribution>(
    pricer: &BlackScholes<N>,
    terms: &MarketTerms,
    kind: &OptionKind,
    market_price: f64,
    config: &SolverConfig,
) -> Result<SolveReport, OptionModelError> {
    let mut volatility = config.initial_guess;

    for iteration in 0..config.iterations {
        let inputs = terms.at_volatility(volatility);
        let d_terms = inputs.d_terms();
        let price = pricer.price_with(&inputs, &d_terms, kind)?;
        let vega = pricer.vega_with(&inputs, &d_terms);

        volatility -= (price - market_price) / (vega * VEGA_TO_UNIT);
        trace!(
            "newton step {}: price={} vega={} -> vol={}",
            iteration + 1,
            price,
            vega,
            volatility
        );
    }

    let residual = pricer.price(&terms.at_volatility(volatility), kind)? - market_price;

    if volatility.is_finite() {
        debug!(
            "implied volatility {} after {} steps (residual {:e})",
            volatility, config.iterations, residual
        );
    } else {
        warn!(
            "implied volatility diverged to {} after {} steps for {} {:?} at price {}",
            volatility, config.iterations, kind, terms, market_price
        );
    }

    Ok(SolveReport {
        volatility,
        iterations: config.iterations,
        residual,
    })
}
