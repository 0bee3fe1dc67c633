//! # Crossover and Recombination Strategies
//!
//! A crossover strategy consumes two parent individuals (independent
//! copies, handed over by the orchestrator) and returns two offspring of
//! the same dimensionality. The swap-based crossovers relocate gene values
//! between the parents without creating or losing any value; the
//! recombination strategies blend gene values and accept a blended pair
//! only when both results stay within the respective bounds.
//!
//! None of the swap-based crossovers re-clamp genes to the bounds; only
//! line/intermediate recombination perform a bounds check, and they do it
//! as an accept/reject per gene rather than as clamping.
//!
//! ## Available strategies
//!
//! - [`OnePointCrossover`]: swap the tail beyond one random cut.
//! - [`TwoPointCrossover`]: swap one random half-open interval.
//! - [`UniformCrossover`]: per-gene independent swap with probability
//!   `p_swap`.
//! - [`LineRecombination`]: one blend-coefficient pair for all genes.
//! - [`IntermediateRecombination`]: blend coefficients redrawn per gene.

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

pub mod one_point;
pub mod recombination;
pub mod two_point;
pub mod uniform;

pub use one_point::OnePointCrossover;
pub use recombination::{IntermediateRecombination, LineRecombination};
pub use two_point::TwoPointCrossover;
pub use uniform::UniformCrossover;

/// Trait for crossover strategies in the genetic algorithm.
///
/// `cross` consumes the parents and returns them as offspring. The
/// orchestrator is responsible for copy discipline: it always passes
/// disposable clones produced by selection, so strategies are free to
/// modify their arguments in place.
pub trait CrossoverStrategy: Debug + Send {
    /// Produces two offspring from two parents.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the parents differ in
    /// dimensionality.
    fn cross(
        &self,
        parent_a: Individual,
        parent_b: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)>;
}

pub(crate) fn check_dimensions(parent_a: &Individual, parent_b: &Individual) -> Result<()> {
    if parent_a.position.len() != parent_b.position.len() {
        return Err(GeneticError::Configuration(format!(
            "Parents differ in dimensionality ({} vs {})",
            parent_a.position.len(),
            parent_b.position.len()
        )));
    }
    Ok(())
}
