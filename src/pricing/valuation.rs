//! Serializable valuation records.

use super::contract::OptionContract;
use super::error::OptionModelError;
use super::types::Greeks;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Price and Greeks of a resolved contract at one volatility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// The contract, with both volatility and market price filled in.
    pub contract: OptionContract,
    /// Volatility the figures were computed at.
    pub volatility: f64,
    /// Theoretical price.
    pub price: f64,
    /// Risk sensitivities.
    pub greeks: Greeks,
}

impl Valuation {
    /// Creates a valuation record.
    #[must_use]
    pub fn new(contract: OptionContract, volatility: f64, price: f64, greeks: Greeks) -> Self {
        Self {
            contract,
            volatility,
            price,
            greeks,
        }
    }

    /// Serializes the valuation to JSON.
    pub fn to_json(&self) -> Result<String, OptionModelError> {
        let json =
            serde_json::to_string(self).map_err(|error| OptionModelError::SerializationError {
                message: error.to_string(),
            })?;
        trace!("valuation to_json: {} bytes", json.len());
        Ok(json)
    }

    /// Deserializes a valuation from JSON.
    pub fn from_json(data: &str) -> Result<Self, OptionModelError> {
        serde_json::from_str(data).map_err(|error| OptionModelError::DeserializationError {
            message: error.to_string(),
        })
    }
}
