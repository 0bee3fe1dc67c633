use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Tournament selection draws `t_size` individuals independently and
/// uniformly (with replacement) from the population and returns the one
/// with the strictly lowest fitness. Larger tournaments bias selection
/// harder towards the best individuals; `t_size` equal to the population
/// size almost always returns the global best of the generation.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::individual::Individual;
/// use soga::rng::RandomNumberGenerator;
/// use soga::selection::{SelectionStrategy, TournamentSelection};
///
/// let bounds = Bounds::from_pairs([("x", (0.0, 1.0))]);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let population: Vec<Individual> = (0..4)
///     .map(|i| {
///         let mut ind = Individual::random(&bounds, &mut rng);
///         ind.fitness = Some(i as f64);
///         ind
///     })
///     .collect();
///
/// let mut selection = TournamentSelection::default();
/// let parent = selection.select(&population, &mut rng).unwrap();
/// assert!(parent.fitness.is_some());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    t_size: usize,
}

impl TournamentSelection {
    /// Creates a new tournament selection with the given tournament size.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `t_size < 2`: a
    /// single-entrant tournament degenerates to random selection and
    /// signals caller error.
    pub fn new(t_size: usize) -> Result<Self> {
        if t_size < 2 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 2".to_string(),
            ));
        }

        Ok(Self { t_size })
    }

    /// The number of candidates sampled per tournament.
    pub fn t_size(&self) -> usize {
        self.t_size
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        // Safe to unwrap because the default size is valid
        Self::new(2).unwrap()
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &mut self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut best = population[rng.gen_range(0..population.len())].clone();
        let mut best_fitness = best.fitness()?;

        for _ in 1..self.t_size {
            let contender = &population[rng.gen_range(0..population.len())];
            let fitness = contender.fitness()?;

            if fitness < best_fitness {
                best = contender.clone();
                best_fitness = fitness;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;

    fn population(fitness: &[f64]) -> Vec<Individual> {
        let bounds = Bounds::from_pairs([("x", (0.0, 1.0))]);
        let mut rng = RandomNumberGenerator::from_seed(1);
        fitness
            .iter()
            .map(|&f| {
                let mut ind = Individual::random(&bounds, &mut rng);
                ind.fitness = Some(f);
                ind
            })
            .collect()
    }

    #[test]
    fn test_rejects_small_tournament() {
        assert!(matches!(
            TournamentSelection::new(1),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            TournamentSelection::new(0),
            Err(GeneticError::Configuration(_))
        ));
        assert!(TournamentSelection::new(2).is_ok());
    }

    #[test]
    fn test_winner_is_fittest_of_sample() {
        // Returned fitness can never exceed any sampled fitness, so over
        // many draws every winner must be a population member and at least
        // one draw should produce the global best.
        let population = population(&[5.0, 3.0, 8.0, 1.0, 9.0]);
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut selection = TournamentSelection::new(5).unwrap();

        let mut saw_global_best = false;
        for _ in 0..200 {
            let winner = selection.select(&population, &mut rng).unwrap();
            let fitness = winner.fitness().unwrap();
            assert!(fitness >= 1.0 && fitness <= 9.0);
            if fitness == 1.0 {
                saw_global_best = true;
            }
        }
        assert!(saw_global_best);
    }

    #[test]
    fn test_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut selection = TournamentSelection::default();

        let result = selection.select(&[], &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_unevaluated_population() {
        let bounds = Bounds::from_pairs([("x", (0.0, 1.0))]);
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population: Vec<Individual> = (0..4)
            .map(|_| Individual::random(&bounds, &mut rng))
            .collect();

        let mut selection = TournamentSelection::default();
        let result = selection.select(&population, &mut rng);
        assert!(matches!(result, Err(GeneticError::UnevaluatedFitness)));
    }
}
