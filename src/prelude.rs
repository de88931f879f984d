//! Commonly used types and functions.

pub use crate::pricing::{
    BlackScholes, BlackScholesInputs, DTerms, ErfApproximation, Greeks, MarketTerms, Moneyness,
    NormalDistribution, OptionContract, OptionKind, OptionModel, OptionModelError, SolveReport,
    SolverConfig, StatrsNormal, Valuation, solve_iv,
};
