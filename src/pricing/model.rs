//! Contract-level operations with lazy resolution.
//!
//! [`OptionModel`] ties the pricer and the solver to an [`OptionContract`].
//! A contract that was created without a volatility gets it solved from its
//! market price the first time any quantity is requested; a contract created
//! without a market price gets it computed the first time it is needed. In
//! both cases the derived value is written into the contract once and reused
//! by every later call.

use super::black_scholes::BlackScholes;
use super::contract::OptionContract;
use super::error::OptionModelError;
use super::normal::{NormalDistribution, StatrsNormal};
use super::solver::{SolverConfig, solve_iv};
use super::types::{BlackScholesInputs, DTerms, Greeks};
use super::valuation::Valuation;
use tracing::debug;

/// Black-Scholes option model: pricer plus implied volatility solver.
#[derive(Debug, Clone, Default)]
pub struct OptionModel<N = StatrsNormal> {
    pricer: BlackScholes<N>,
    solver: SolverConfig,
}

impl OptionModel<StatrsNormal> {
    /// Creates a model backed by `statrs` with the default solver settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: NormalDistribution> OptionModel<N> {
    /// Creates a model with an explicit normal distribution provider.
    #[must_use]
    pub fn with_distribution(normal: N) -> Self {
        Self {
            pricer: BlackScholes::new(normal),
            solver: SolverConfig::default(),
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_solver_config(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn solver_config(&self) -> &SolverConfig {
        &self.solver
    }

    pub fn pricer(&self) -> &BlackScholes<N> {
        &self.pricer
    }

    /// Theoretical price. Caches it as the market price if none was given.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn price(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        let price = self.pricer.price(&inputs, contract.kind())?;
        if contract.market_price().is_none() {
            debug!("caching computed market price {}", price);
            contract.fill_market_price(price);
        }
        Ok(price)
    }

    /// Delta.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn delta(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        self.pricer.delta(&inputs, contract.kind())
    }

    /// Gamma. Does not inspect the option kind.
    ///
    /// # Errors
    /// Only when the volatility has to be solved for and the kind cannot be
    /// priced.
    pub fn gamma(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        Ok(self.pricer.gamma(&inputs))
    }

    /// Theta per calendar day.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn theta(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        self.pricer.theta(&inputs, contract.kind())
    }

    /// Vega per volatility point. Does not inspect the option kind.
    ///
    /// # Errors
    /// Only when the volatility has to be solved for and the kind cannot be
    /// priced.
    pub fn vega(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        Ok(self.pricer.vega(&inputs))
    }

    /// Rho per rate point.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn rho(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        self.pricer.rho(&inputs, contract.kind())
    }

    /// All five Greeks from one d1/d2 evaluation.
    pub fn greeks(&self, contract: &mut OptionContract) -> Result<Greeks, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        self.pricer.greeks(&inputs, contract.kind())
    }

    /// d1, d2 and the shared factors for the contract.
    pub fn d_terms(&self, contract: &mut OptionContract) -> Result<DTerms, OptionModelError> {
        Ok(self.resolved_inputs(contract)?.d_terms())
    }

    pub fn d1(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        Ok(self.d_terms(contract)?.d1)
    }

    pub fn d2(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        Ok(self.d_terms(contract)?.d2)
    }

    /// Price, Greeks and resolved volatility in one record.
    pub fn valuation(&self, contract: &mut OptionContract) -> Result<Valuation, OptionModelError> {
        let inputs = self.resolved_inputs(contract)?;
        let terms = inputs.d_terms();
        let price = self.pricer.price_with(&inputs, &terms, contract.kind())?;
        let greeks = self.pricer.greeks_with(&inputs, &terms, contract.kind())?;
        contract.fill_market_price(price);
        Ok(Valuation::new(contract.clone(), inputs.volatility, price, greeks))
    }

    /// Implied volatility using the model's solver configuration.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn implied_volatility(
        &self,
        contract: &mut OptionContract,
    ) -> Result<f64, OptionModelError> {
        self.implied_volatility_using(contract, &self.solver)
    }

    /// Implied volatility with an explicit initial guess and step count.
    ///
    /// The solved value is stored on the contract only if it has no
    /// volatility yet. Otherwise the contract keeps its existing volatility
    /// and the returned value may differ from it.
    ///
    /// # Errors
    /// [`OptionModelError::InvalidOptionType`] for unsupported kinds.
    pub fn implied_volatility_with(
        &self,
        contract: &mut OptionContract,
        initial_guess: f64,
        iterations: u32,
    ) -> Result<f64, OptionModelError> {
        let config = SolverConfig::new()
            .with_initial_guess(initial_guess)
            .with_iterations(iterations);
        self.implied_volatility_using(contract, &config)
    }

    /// Solves against the contract's market price, computing that price
    /// first if only the volatility is known. The result is cached as the
    /// contract's volatility only if none was set.
    fn implied_volatility_using(
        &self,
        contract: &mut OptionContract,
        config: &SolverConfig,
    ) -> Result<f64, OptionModelError> {
        let target = self.resolve_market_price(contract)?;
        let report = solve_iv(&self.pricer, &contract.terms(), contract.kind(), target, config)?;
        contract.fill_volatility(report.volatility);
        Ok(report.volatility)
    }

    fn resolve_volatility(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        if let Some(volatility) = contract.volatility() {
            return Ok(volatility);
        }
        let Some(target) = contract.market_price() else {
            return Err(OptionModelError::MissingInput);
        };

        let report = solve_iv(
            &self.pricer,
            &contract.terms(),
            contract.kind(),
            target,
            &self.solver,
        )?;
        debug!(
            "resolved volatility {} from market price {}",
            report.volatility, target
        );
        Ok(contract.fill_volatility(report.volatility))
    }

    fn resolve_market_price(&self, contract: &mut OptionContract) -> Result<f64, OptionModelError> {
        if let Some(price) = contract.market_price() {
            return Ok(price);
        }
        let Some(volatility) = contract.volatility() else {
            return Err(OptionModelError::MissingInput);
        };

        let price = self
            .pricer
            .price(&contract.terms().at_volatility(volatility), contract.kind())?;
        debug!(
            "resolved market price {} from volatility {}",
            price, volatility
        );
        Ok(contract.fill_market_price(price))
    }

    fn resolved_inputs(
        &self,
        contract: &mut OptionContract,
    ) -> Result<BlackScholesInputs, OptionModelError> {
        let volatility = self.resolve_volatility(contract)?;
        Ok(contract.terms().at_volatility(volatility))
    }
}
