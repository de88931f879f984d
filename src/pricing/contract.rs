//! The option contract value object.

use super::error::OptionModelError;
use super::types::{MarketTerms, Moneyness, OptionKind};
use serde::{Deserialize, Serialize};

/// A European option on a non-dividend-paying underlying.
///
/// A contract is created with a volatility, a market price, or both. The
/// one left unset is filled in at most once by
/// [`OptionModel`](super::OptionModel) the first time it is needed and never
/// changes afterwards. Everything else is immutable.
///
/// Spot, strike, maturity and volatility are expected to be positive; this
/// is not checked; out-of-domain values yield `NaN` or infinite results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ContractFields")]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    rate: f64,
    maturity: f64,
    kind: OptionKind,
    volatility: Option<f64>,
    market_price: Option<f64>,
}

/// Unvalidated wire form of [`OptionContract`].
#[derive(Deserialize)]
struct ContractFields {
    spot: f64,
    strike: f64,
    rate: f64,
    maturity: f64,
    kind: OptionKind,
    #[serde(default)]
    volatility: Option<f64>,
    #[serde(default)]
    market_price: Option<f64>,
}

impl TryFrom<ContractFields> for OptionContract {
    type Error = OptionModelError;

    fn try_from(fields: ContractFields) -> Result<Self, Self::Error> {
        OptionContract::new(
            fields.spot,
            fields.strike,
            fields.rate,
            fields.maturity,
            fields.kind,
            fields.volatility,
            fields.market_price,
        )
    }
}

impl OptionContract {
    /// Creates a contract.
    ///
    /// # Arguments
    /// - `spot`: Underlying spot price (S)
    /// - `strike`: Option strike price (K)
    /// - `rate`: Continuously-compounded risk-free rate (r)
    /// - `maturity`: Time to expiration in years (T)
    /// - `kind`: `"call"`, `"put"` or an [`OptionKind`]
    /// - `volatility`: Annualized volatility, `None` to solve for it
    /// - `market_price`: Observed option price, `None` to compute it
    ///
    /// # Errors
    /// [`OptionModelError::MissingInput`] when both `volatility` and
    /// `market_price` are `None`.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        maturity: f64,
        kind: impl Into<OptionKind>,
        volatility: Option<f64>,
        market_price: Option<f64>,
    ) -> Result<Self, OptionModelError> {
        if volatility.is_none() && market_price.is_none() {
            return Err(OptionModelError::MissingInput);
        }

        Ok(Self {
            spot,
            strike,
            rate,
            maturity,
            kind: kind.into(),
            volatility,
            market_price,
        })
    }

    /// Creates a contract with a known volatility, to be priced.
    #[must_use]
    pub fn with_volatility(
        spot: f64,
        strike: f64,
        rate: f64,
        maturity: f64,
        kind: impl Into<OptionKind>,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            maturity,
            kind: kind.into(),
            volatility: Some(volatility),
            market_price: None,
        }
    }

    /// Creates a contract with an observed price, to solve for volatility.
    #[must_use]
    pub fn with_market_price(
        spot: f64,
        strike: f64,
        rate: f64,
        maturity: f64,
        kind: impl Into<OptionKind>,
        market_price: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            maturity,
            kind: kind.into(),
            volatility: None,
            market_price: Some(market_price),
        }
    }

    /// Underlying spot price (S).
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Option strike price (K).
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Continuously-compounded risk-free rate (r).
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Time to expiration in years (T).
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Option kind as parsed at construction.
    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    /// The volatility, if supplied or already solved for.
    pub fn volatility(&self) -> Option<f64> {
        self.volatility
    }

    /// The market price, if supplied or already computed.
    pub fn market_price(&self) -> Option<f64> {
        self.market_price
    }

    /// Returns true once both volatility and market price are known.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.volatility.is_some() && self.market_price.is_some()
    }

    /// The volatility-free market inputs.
    #[must_use]
    pub fn terms(&self) -> MarketTerms {
        MarketTerms::new(self.spot, self.strike, self.rate, self.maturity)
    }

    /// Intrinsic value, `None` for unsupported kinds.
    #[must_use]
    pub fn intrinsic_value(&self) -> Option<f64> {
        self.terms().intrinsic_value(&self.kind)
    }

    /// Moneyness, `None` for unsupported kinds.
    #[must_use]
    pub fn moneyness(&self) -> Option<Moneyness> {
        self.terms().moneyness(&self.kind)
    }

    /// Stores the volatility unless one is already present, returning the
    /// value that is in effect afterwards.
    pub(crate) fn fill_volatility(&mut self, volatility: f64) -> f64 {
        *self.volatility.get_or_insert(volatility)
    }

    /// Stores the market price unless one is already present, returning the
    /// value that is in effect afterwards.
    pub(crate) fn fill_market_price(&mut self, market_price: f64) -> f64 {
        *self.market_price.get_or_insert(market_price)
    }
}
