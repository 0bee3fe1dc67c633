//! # Selection Strategies
//!
//! This module contains the selection strategies used to pick parents from
//! a population. A strategy is given the population once per generation via
//! [`SelectionStrategy::preprocess`] (to amortise any O(n) setup such as
//! building a cumulative weight distribution) and then produces one parent
//! per [`SelectionStrategy::select`] call.
//!
//! Fitness is a cost: lower is better throughout the engine.
//!
//! ## Available strategies
//!
//! - [`RandomSelection`]: uniform choice over the population.
//! - [`TournamentSelection`]: draws `k >= 2` individuals with replacement
//!   and returns the fittest of the sample.
//! - [`FitnessProportionateSelection`]: roulette-wheel sampling with
//!   `1/fitness` weights.
//! - [`StochasticUniversalSamplingSelection`]: minimum-variance sampling
//!   using one random offset and fixed-step traversal of the weight CDF.

use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

pub mod fitness_proportionate;
pub mod random;
pub mod stochastic_universal;
pub mod tournament;

pub use fitness_proportionate::FitnessProportionateSelection;
pub use random::RandomSelection;
pub use stochastic_universal::StochasticUniversalSamplingSelection;
pub use tournament::TournamentSelection;

/// Trait for selection strategies in the genetic algorithm.
///
/// The orchestrator calls [`preprocess`](Self::preprocess) once per
/// generation before any [`select`](Self::select) calls. `select` always
/// returns an independent copy of a population member, never a reference,
/// so parents can be consumed by crossover without touching the population.
pub trait SelectionStrategy: Debug + Send {
    /// Called once per generation before any `select` calls.
    ///
    /// The default implementation is a no-op; strategies with per-generation
    /// state (weight CDFs, sampling pointers) override it.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or contains unevaluated
    /// individuals where the strategy needs fitness values.
    fn preprocess(
        &mut self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let _ = (population, rng);
        Ok(())
    }

    /// Selects one individual from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - An individual's fitness is read before evaluation
    /// - The strategy requires `preprocess` and it has not been called for
    ///   this population
    fn select(
        &mut self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual>;
}
