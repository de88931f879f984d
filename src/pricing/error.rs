//! Error types for option pricing and implied volatility.

use std::fmt;

/// Errors returned by the option model.
///
/// Numeric domain problems (non-positive spot, strike, maturity or
/// volatility) are not represented here: they surface as `NaN` or infinite
/// values produced by the floating-point operations themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionModelError {
    /// Neither a volatility nor a market price was supplied for a contract.
    MissingInput,

    /// The option kind is neither a call nor a put.
    InvalidOptionType {
        /// The rejected option kind, lowercased.
        kind: String,
    },

    /// A valuation could not be serialized.
    SerializationError {
        /// Underlying serializer message.
        message: String,
    },

    /// A valuation could not be deserialized.
    DeserializationError {
        /// Underlying deserializer message.
        message: String,
    },
}

impl fmt::Display for OptionModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionModelError::MissingInput => {
                write!(
                    f,
                    "missing input: either a volatility or a market price must be supplied"
                )
            }
            OptionModelError::InvalidOptionType { kind } => {
                write!(f, "invalid option type: {kind:?} (expected \"call\" or \"put\")")
            }
            OptionModelError::SerializationError { message } => {
                write!(f, "serialization error: {message}")
            }
            OptionModelError::DeserializationError { message } => {
                write!(f, "deserialization error: {message}")
            }
        }
    }
}

impl std::error::Error for OptionModelError {}
