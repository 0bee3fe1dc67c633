use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// Stochastic universal sampling (SUS).
///
/// [`preprocess`](SelectionStrategy::preprocess) shuffles a copy of the
/// population, builds the same `1/fitness` CDF as
/// [`FitnessProportionateSelection`](crate::selection::FitnessProportionateSelection)
/// and draws a single starting offset `v0 = U(0, total/n)`. Successive
/// [`select`](SelectionStrategy::select) calls advance a shared pointer
/// through the CDF by the fixed step `total/n`, so exactly `n` calls after
/// one `preprocess` sample the whole population with minimum-variance
/// spacing.
///
/// Calling `select` more than `n` times without re-invoking `preprocess`
/// is undefined; the orchestrator re-preprocesses every generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct StochasticUniversalSamplingSelection {
    shuffled: Vec<Individual>,
    cdf: Vec<f64>,
    index: usize,
    value: f64,
    step: f64,
}

impl StochasticUniversalSamplingSelection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStrategy for StochasticUniversalSamplingSelection {
    fn preprocess(
        &mut self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        self.shuffled = population.to_vec();
        rng.shuffle(&mut self.shuffled);

        self.cdf.clear();
        let mut running = 0.0;
        for individual in &self.shuffled {
            running += 1.0 / individual.fitness()?;
            self.cdf.push(running);
        }

        self.step = running / self.shuffled.len() as f64;
        self.value = rng.gen_range(0.0..self.step);
        self.index = 0;

        Ok(())
    }

    fn select(
        &mut self,
        _population: &[Individual],
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        if self.shuffled.is_empty() {
            return Err(GeneticError::Configuration(
                "StochasticUniversalSamplingSelection::select called without preprocess"
                    .to_string(),
            ));
        }

        while self.index < self.shuffled.len() - 1 && self.cdf[self.index] < self.value {
            self.index += 1;
        }
        self.value += self.step;

        Ok(self.shuffled[self.index].clone())
    }
}
