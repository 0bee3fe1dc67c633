use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// Roulette-wheel selection with `1/fitness` weights.
///
/// Because the engine minimises, a lower fitness must translate into a
/// higher selection weight; [`preprocess`](SelectionStrategy::preprocess)
/// computes `weight[i] = 1 / fitness[i]` and its running cumulative sum,
/// and [`select`](SelectionStrategy::select) draws a uniform value over the
/// total weight and walks the CDF.
///
/// Precondition: every fitness must be strictly positive. A zero fitness
/// produces an infinite weight and degenerate sampling; this is a contract
/// the fitness function must satisfy, not a guarded case.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct FitnessProportionateSelection {
    cdf: Vec<f64>,
}

impl FitnessProportionateSelection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStrategy for FitnessProportionateSelection {
    fn preprocess(
        &mut self,
        population: &[Individual],
        _rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        self.cdf.clear();
        let mut running = 0.0;
        for individual in population {
            running += 1.0 / individual.fitness()?;
            self.cdf.push(running);
        }

        Ok(())
    }

    fn select(
        &mut self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if self.cdf.len() != population.len() {
            return Err(GeneticError::Configuration(
                "FitnessProportionateSelection::select called without preprocess".to_string(),
            ));
        }

        let total = self.cdf[self.cdf.len() - 1];
        let u = rng.gen_range(0.0..total);

        // First individual whose cumulative weight interval contains u.
        let idx = self.cdf.partition_point(|&c| c < u);
        Ok(population[idx.min(population.len() - 1)].clone())
    }
}
