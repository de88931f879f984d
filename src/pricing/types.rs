//! Value types shared by the pricer and the solver.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Relative distance from the strike under which an option counts as ATM.
const ATM_THRESHOLD: f64 = 0.001;

/// Option kind.
///
/// Parsing is case-insensitive and never fails: names other than `call` and
/// `put` are kept as [`OptionKind::Unsupported`] and rejected later by the
/// operations that branch on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OptionKind {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
    /// Any other payoff name, such as `"straddle"`.
    Unsupported(String),
}

impl OptionKind {
    /// Returns true for calls and puts.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, OptionKind::Unsupported(_))
    }

    /// Lowercase name of the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
            OptionKind::Unsupported(name) => name,
        }
    }
}

impl From<&str> for OptionKind {
    fn from(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "call" => OptionKind::Call,
            "put" => OptionKind::Put,
            _ => OptionKind::Unsupported(name),
        }
    }
}

impl From<String> for OptionKind {
    fn from(name: String) -> Self {
        OptionKind::from(name.as_str())
    }
}

impl From<OptionKind> for String {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Unsupported(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for OptionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OptionKind::from(s))
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moneyness of an option relative to its strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moneyness {
    /// Exercising now would pay off.
    InTheMoney,
    /// Spot within 0.1% of the strike.
    AtTheMoney,
    /// Exercising now would not pay off.
    OutOfTheMoney,
}

/// The volatility-free market inputs of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketTerms {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Option strike price (K).
    pub strike: f64,
    /// Continuously-compounded risk-free rate, annualized (r).
    pub rate: f64,
    /// Time to expiration in years (T).
    pub maturity: f64,
}

impl MarketTerms {
    /// Creates market terms.
    #[must_use]
    pub fn new(spot: f64, strike: f64, rate: f64, maturity: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            maturity,
        }
    }

    /// Completes the terms with a volatility.
    #[must_use]
    pub fn at_volatility(&self, volatility: f64) -> BlackScholesInputs {
        BlackScholesInputs {
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            maturity: self.maturity,
            volatility,
        }
    }

    /// Intrinsic value: max(0, S − K) for calls, max(0, K − S) for puts.
    ///
    /// Returns `None` for unsupported kinds.
    #[must_use]
    pub fn intrinsic_value(&self, kind: &OptionKind) -> Option<f64> {
        match kind {
            OptionKind::Call => Some((self.spot - self.strike).max(0.0)),
            OptionKind::Put => Some((self.strike - self.spot).max(0.0)),
            OptionKind::Unsupported(_) => None,
        }
    }

    /// Classifies the option as in, at or out of the money.
    ///
    /// Returns `None` for unsupported kinds.
    #[must_use]
    pub fn moneyness(&self, kind: &OptionKind) -> Option<Moneyness> {
        let intrinsic = self.intrinsic_value(kind)?;
        let moneyness = if (self.spot - self.strike).abs() / self.strike < ATM_THRESHOLD {
            Moneyness::AtTheMoney
        } else if intrinsic > 0.0 {
            Moneyness::InTheMoney
        } else {
            Moneyness::OutOfTheMoney
        };
        Some(moneyness)
    }
}

/// Fully specified Black-Scholes inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlackScholesInputs {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Option strike price (K).
    pub strike: f64,
    /// Continuously-compounded risk-free rate, annualized (r).
    pub rate: f64,
    /// Time to expiration in years (T).
    pub maturity: f64,
    /// Annualized volatility (σ).
    pub volatility: f64,
}

impl BlackScholesInputs {
    /// Computes d1, d2 and the shared factors used by every formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T), d2 = d1 − σ√T
    #[must_use]
    pub fn d_terms(&self) -> DTerms {
        let sqrt_time = self.maturity.sqrt();
        let vol_sqrt_time = self.volatility * sqrt_time;
        let d1 = ((self.spot / self.strike).ln()
            + (self.rate + self.volatility * self.volatility / 2.0) * self.maturity)
            / vol_sqrt_time;

        DTerms {
            d1,
            d2: d1 - vol_sqrt_time,
            sqrt_time,
            discount: (-self.rate * self.maturity).exp(),
        }
    }
}

/// Intermediate quantities computed once per pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DTerms {
    /// The d1 parameter.
    pub d1: f64,
    /// The d2 parameter.
    pub d2: f64,
    /// √T.
    pub sqrt_time: f64,
    /// Discount factor e^(−rT).
    pub discount: f64,
}

/// Risk sensitivities of an option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// ∂price/∂S.
    pub delta: f64,
    /// ∂²price/∂S².
    pub gamma: f64,
    /// Time decay per calendar day.
    pub theta: f64,
    /// Price change per 1 percentage point of volatility.
    pub vega: f64,
    /// Price change per 1 percentage point of rate.
    pub rho: f64,
}
