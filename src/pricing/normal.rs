//! Standard normal distribution providers.
//!
//! The pricer is generic over [`NormalDistribution`] so the source of
//! Φ (CDF) and φ (PDF) can be swapped without touching the formulas.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use std::f64::consts::PI;

/// Square root of 2, precomputed for efficiency.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// A standard normal distribution, N(0, 1).
pub trait NormalDistribution {
    /// Cumulative distribution function Φ(x) = P(Z ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Probability density function φ(x).
    fn pdf(&self, x: f64) -> f64;
}

/// Double-precision standard normal backed by `statrs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatrsNormal {
    inner: Normal,
}

impl StatrsNormal {
    /// Creates the standard normal N(0, 1).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Normal::standard(),
        }
    }
}

impl Default for StatrsNormal {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalDistribution for StatrsNormal {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }
}

/// Dependency-free standard normal using a polynomial erf approximation.
///
/// Accuracy is limited by the erf approximation (about 1.5×10⁻⁷), which is
/// enough for quoting but not for tight round-trip tolerances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErfApproximation;

impl ErfApproximation {
    /// Approximation of the error function (erf).
    ///
    /// Uses Abramowitz and Stegun approximation (formula 7.1.26).
    #[must_use]
    pub fn erf(x: f64) -> f64 {
        const A1: f64 = 0.254829592;
        const A2: f64 = -0.284496736;
        const A3: f64 = 1.421413741;
        const A4: f64 = -1.453152027;
        const A5: f64 = 1.061405429;
        const P: f64 = 0.3275911;

        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();

        let t = 1.0 / (1.0 + P * x);
        let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;

        sign * (1.0 - poly * (-x * x).exp())
    }
}

impl NormalDistribution for ErfApproximation {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        0.5 * (1.0 + Self::erf(x / SQRT_2))
    }

    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }
}
