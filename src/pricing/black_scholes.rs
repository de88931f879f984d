//! Black-Scholes pricing model and Greeks calculation.
//!
//! Every public method computes [`DTerms`] once and hands it to the
//! `*_with` variant, so price and Greeks evaluated for the same inputs
//! always share the same d1 and d2.

use super::error::OptionModelError;
use super::normal::{NormalDistribution, StatrsNormal};
use super::types::{BlackScholesInputs, DTerms, Greeks, OptionKind};
use tracing::trace;

/// Calendar days used to express theta per day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Scale from a unit move to a 1 percentage point move.
const PERCENT: f64 = 0.01;

/// Black-Scholes-Merton pricer for European options without dividends.
///
/// Generic over the standard normal provider.
#[derive(Debug, Clone, Default)]
pub struct BlackScholes<N = StatrsNormal> {
    normal: N,
}

impl<N: NormalDistribution> BlackScholes<N> {
    /// Creates a pricer using the given normal distribution.
    #[must_use]
    pub fn new(normal: N) -> Self {
        Self { normal }
    }

    /// Calculates the theoretical option price.
    ///
    /// For calls: C = S·N(d1) − K·e^(−rT)·N(d2)
    /// For puts:  P = K·e^(−rT)·N(−d2) − S·N(−d1)
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn price(
        &self,
        inputs: &BlackScholesInputs,
        kind: &OptionKind,
    ) -> Result<f64, OptionModelError> {
        self.price_with(inputs, &inputs.d_terms(), kind)
    }

    /// Price from precomputed d-terms.
    pub fn price_with(
        &self,
        inputs: &BlackScholesInputs,
        terms: &DTerms,
        kind: &OptionKind,
    ) -> Result<f64, OptionModelError> {
        let n = &self.normal;
        let price = match kind {
            OptionKind::Call => {
                inputs.spot * n.cdf(terms.d1) - inputs.strike * terms.discount * n.cdf(terms.d2)
            }
            OptionKind::Put => {
                inputs.strike * terms.discount * n.cdf(-terms.d2) - inputs.spot * n.cdf(-terms.d1)
            }
            OptionKind::Unsupported(name) => return Err(invalid_kind(name)),
        };
        trace!("price: {} {:?} -> {}", kind, inputs, price);
        Ok(price)
    }

    /// Calculates delta (∂price/∂S).
    ///
    /// For calls: Δ = N(d1); for puts: Δ = −N(−d1)
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn delta(
        &self,
        inputs: &BlackScholesInputs,
        kind: &OptionKind,
    ) -> Result<f64, OptionModelError> {
        self.delta_with(&inputs.d_terms(), kind)
    }

    /// Delta from precomputed d-terms.
    pub fn delta_with(&self, terms: &DTerms, kind: &OptionKind) -> Result<f64, OptionModelError> {
        match kind {
            OptionKind::Call => Ok(self.normal.cdf(terms.d1)),
            OptionKind::Put => Ok(-self.normal.cdf(-terms.d1)),
            OptionKind::Unsupported(name) => Err(invalid_kind(name)),
        }
    }

    /// Calculates gamma (∂²price/∂S²).
    ///
    /// Γ = N'(d1) / (S·σ·√T), identical for calls and puts, so the kind is
    /// never inspected.
    #[must_use]
    pub fn gamma(&self, inputs: &BlackScholesInputs) -> f64 {
        self.gamma_with(inputs, &inputs.d_terms())
    }

    /// Gamma from precomputed d-terms.
    #[must_use]
    pub fn gamma_with(&self, inputs: &BlackScholesInputs, terms: &DTerms) -> f64 {
        self.normal.pdf(terms.d1) / (inputs.spot * inputs.volatility * terms.sqrt_time)
    }

    /// Calculates theta per calendar day.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn theta(
        &self,
        inputs: &BlackScholesInputs,
        kind: &OptionKind,
    ) -> Result<f64, OptionModelError> {
        self.theta_with(inputs, &inputs.d_terms(), kind)
    }

    /// Theta from precomputed d-terms.
    pub fn theta_with(
        &self,
        inputs: &BlackScholesInputs,
        terms: &DTerms,
        kind: &OptionKind,
    ) -> Result<f64, OptionModelError> {
        let n = &self.normal;
        let decay = -inputs.spot * n.pdf(terms.d1) * inputs.volatility / (2.0 * terms.sqrt_time);
        let carry = inputs.rate * inputs.strike * terms.discount;

        let theta_annual = match kind {
            OptionKind::Call => decay - carry * n.cdf(terms.d2),
            OptionKind::Put => decay + carry * n.cdf(-terms.d2),
            OptionKind::Unsupported(name) => return Err(invalid_kind(name)),
        };

        Ok(theta_annual / DAYS_PER_YEAR)
    }

    /// Calculates vega per 1 percentage point of volatility.
    ///
    /// Vega = S·N'(d1)·√T·0.01, identical for calls and puts.
    #[must_use]
    pub fn vega(&self, inputs: &BlackScholesInputs) -> f64 {
        self.vega_with(inputs, &inputs.d_terms())
    }

    /// Vega from precomputed d-terms.
    #[must_use]
    pub fn vega_with(&self, inputs: &BlackScholesInputs, terms: &DTerms) -> f64 {
        inputs.spot * self.normal.pdf(terms.d1) * terms.sqrt_time * PERCENT
    }

    /// Calculates rho per 1 percentage point of rate.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn rho(
        &self,
        inputs: &BlackScholesInputs,
        kind: &OptionKind,
    ) -> Result<f64, OptionModelError> {
        self.rho_with(inputs, &inputs.d_terms(), kind)
    }

    /// Rho from precomputed d-terms.
    pub fn rho_with(
        &self,
        inputs: &BlackScholesInputs,
        terms: &DTerms,
        kind: &OptionKind,
    ) -> Result<f64, OptionModelError> {
        let scale = inputs.strike * inputs.maturity * terms.discount;
        match kind {
            OptionKind::Call => Ok(scale * self.normal.cdf(terms.d2) / 100.0),
            OptionKind::Put => Ok(-scale * self.normal.cdf(-terms.d2) / 100.0),
            OptionKind::Unsupported(name) => Err(invalid_kind(name)),
        }
    }

    /// All five Greeks from a single d-terms evaluation.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn greeks(
        &self,
        inputs: &BlackScholesInputs,
        kind: &OptionKind,
    ) -> Result<Greeks, OptionModelError> {
        self.greeks_with(inputs, &inputs.d_terms(), kind)
    }

    /// Greeks from precomputed d-terms.
    pub fn greeks_with(
        &self,
        inputs: &BlackScholesInputs,
        terms: &DTerms,
        kind: &OptionKind,
    ) -> Result<Greeks, OptionModelError> {
        Ok(Greeks {
            delta: self.delta_with(terms, kind)?,
            gamma: self.gamma_with(inputs, terms),
            theta: self.theta_with(inputs, terms, kind)?,
            vega: self.vega_with(inputs, terms),
            rho: self.rho_with(inputs, terms, kind)?,
        })
    }
}

fn invalid_kind(name: &str) -> OptionModelError {
    OptionModelError::InvalidOptionType {
        kind: name.to_string(),
    }
}
