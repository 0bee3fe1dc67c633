//! # Mutation Strategies
//!
//! A mutation strategy perturbs one individual's position in place. The
//! orchestrator applies it to every child produced by crossover before the
//! child enters the next generation.
//!
//! Mutation does NOT re-clamp the position to the bounds. That asymmetry
//! (recombination checks bounds, mutation does not) is deliberate; the
//! unit tests pin the escaping behaviour rather than hide it.

use std::fmt::Debug;

use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for mutation strategies in the genetic algorithm.
pub trait MutationStrategy: Debug + Send {
    /// Perturbs the individual's position in place.
    ///
    /// The fitness is left untouched; it becomes stale and is refreshed by
    /// the orchestrator's next evaluation pass.
    fn mutate(&self, individual: &mut Individual, rng: &mut RandomNumberGenerator);
}

/// Random scaling mutation.
///
/// Multiplies the entire position vector by a single scalar drawn uniformly
/// from `[lower, upper]`. The default range `[0.9, 1.1]` nudges a candidate
/// by at most ten percent in either direction.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::individual::Individual;
/// use soga::mutation::{MutationStrategy, RandomMutation};
/// use soga::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::from_pairs([("x", (1.0, 2.0))]);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let mut individual = Individual::random(&bounds, &mut rng);
///
/// let mutation = RandomMutation::default();
/// mutation.mutate(&mut individual, &mut rng);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RandomMutation {
    lower: f64,
    upper: f64,
}

impl RandomMutation {
    /// Creates a random mutation drawing its scale factor from
    /// `[lower, upper]`.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

impl Default for RandomMutation {
    fn default() -> Self {
        Self::new(0.9, 1.1)
    }
}

impl MutationStrategy for RandomMutation {
    fn mutate(&self, individual: &mut Individual, rng: &mut RandomNumberGenerator) {
        let scale = rng.gen_range(self.lower..self.upper);
        for gene in &mut individual.position {
            *gene *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;

    #[test]
    fn test_scales_whole_vector_by_one_factor() {
        let bounds = Bounds::from_pairs([("x", (1.0, 2.0)), ("y", (3.0, 4.0))]);
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut individual = Individual::random(&bounds, &mut rng);
        let before = individual.position.clone();

        RandomMutation::default().mutate(&mut individual, &mut rng);

        let factor = individual.position[0] / before[0];
        assert!((0.9..1.1).contains(&factor));
        for (after, original) in individual.position.iter().zip(&before) {
            assert!((after / original - factor).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mutation_can_leave_bounds() {
        // Mutation never re-clamps; a gene at the upper bound scaled by a
        // factor above one escapes the box. This pins the documented
        // asymmetry between mutation and recombination.
        let bounds = Bounds::from_pairs([("x", (0.0, 1.0))]);
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut individual = Individual::random(&bounds, &mut rng);
        individual.position = vec![1.0];

        let mutation = RandomMutation::new(1.5, 2.0);
        mutation.mutate(&mut individual, &mut rng);

        assert!(individual.position[0] > 1.0);
    }

    #[test]
    fn test_fitness_left_untouched() {
        let bounds = Bounds::from_pairs([("x", (1.0, 2.0))]);
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut individual = Individual::random(&bounds, &mut rng);
        individual.fitness = Some(7.0);

        RandomMutation::default().mutate(&mut individual, &mut rng);

        assert_eq!(individual.fitness, Some(7.0));
    }
}
