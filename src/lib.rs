//! # bsm-rs
//!
//! Theoretical prices and risk sensitivities of European options under the
//! Black-Scholes-Merton model, plus implied volatility recovery from an
//! observed market price.
//!
//! The library performs no I/O and installs no logging subscriber. Diagnostic
//! events are emitted through `tracing` (`trace` for individual solver steps
//! and computed prices, `debug` for lazily resolved contract fields, `warn`
//! when the solver ends on a non-finite volatility).
//!
//! Inputs are not range-checked: non-positive spot, strike, maturity or
//! volatility produce `NaN` or infinite results rather than errors.

pub mod pricing;

pub mod prelude;
