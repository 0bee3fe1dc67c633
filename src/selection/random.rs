use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// A selection strategy that picks individuals uniformly at random.
///
/// Fitness is ignored entirely. Useful as a pressure-free baseline when
/// comparing selection strategies.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::individual::Individual;
/// use soga::rng::RandomNumberGenerator;
/// use soga::selection::{RandomSelection, SelectionStrategy};
///
/// let bounds = Bounds::from_pairs([("x", (0.0, 1.0))]);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let population: Vec<Individual> =
///     (0..4).map(|_| Individual::random(&bounds, &mut rng)).collect();
///
/// let mut selection = RandomSelection;
/// let parent = selection.select(&population, &mut rng).unwrap();
/// assert_eq!(parent.position.len(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RandomSelection;

impl SelectionStrategy for RandomSelection {
    fn select(
        &mut self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let idx = rng.gen_range(0..population.len());
        Ok(population[idx].clone())
    }
}
