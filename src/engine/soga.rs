use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::bounds::Bounds;
use crate::constraints::ConstraintManager;
use crate::crossover::{CrossoverStrategy, OnePointCrossover};
use crate::engine::fitness::FitnessFunction;
use crate::error::{GeneticError, Result};
use crate::history::History;
use crate::individual::Individual;
use crate::mutation::{MutationStrategy, RandomMutation};
use crate::rng::RandomNumberGenerator;
use crate::selection::{SelectionStrategy, TournamentSelection};
use crate::termination::{IterationTermination, OptimisationStatus, TerminationStrategy};

/// Minimum population size before fitness evaluation is parallelised.
pub(crate) const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Lifecycle of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No population exists yet.
    Uninitialised,
    /// A population exists and the generational loop may run.
    Running,
    /// The termination strategy has fired (or the run was cancelled).
    Done,
}

/// The generational single-objective GA engine.
///
/// Owns the population and the all-time-best state, and composes the
/// injected strategies each generation into: evaluate, constraint-gated
/// best-tracking, parent selection, crossover, mutation, population
/// replacement, history recording and a termination check.
///
/// The engine is elitist by default: the recorded best individual is
/// written into the next generation unchanged, so the optimum can never be
/// discarded by selection drift. Disable via
/// [`SogaBuilder::with_elitism`](crate::engine::SogaBuilder::with_elitism)
/// to get plain generational replacement.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::engine::Soga;
///
/// let bounds = Bounds::from_pairs([("x0", (0.0, 10.0)), ("x1", (0.0, 10.0))]);
/// let mut engine = Soga::new(bounds, 10, 10).unwrap();
///
/// let best = engine
///     .optimise(&|position: &[f64]| position.iter().map(|x| x * x).sum::<f64>())
///     .unwrap();
/// assert!(best.fitness.is_some());
/// ```
#[derive(Debug)]
pub struct Soga {
    pub(crate) bounds: Bounds,
    pub(crate) n_individuals: usize,
    pub(crate) iteration: usize,
    pub(crate) population: Vec<Individual>,
    pub(crate) best_individual: Option<Individual>,
    pub(crate) state: EngineState,
    pub(crate) selection: Box<dyn SelectionStrategy>,
    pub(crate) crossover: Box<dyn CrossoverStrategy>,
    pub(crate) mutation: Box<dyn MutationStrategy>,
    pub(crate) termination: Box<dyn TerminationStrategy>,
    pub(crate) constraint_manager: ConstraintManager,
    pub(crate) history: History,
    pub(crate) rng: RandomNumberGenerator,
    pub(crate) elitism: bool,
    pub(crate) parallel_threshold: usize,
    pub(crate) cancel: Option<Arc<AtomicBool>>,
}

impl Soga {
    /// Creates a generational engine with the default strategy set:
    /// tournament selection (k = 2), one-point crossover, random mutation
    /// and iteration-based termination.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `n_individuals` is zero
    /// or odd: the population is paired off two parents at a time, so an
    /// odd size would leave an individual unpaired.
    pub fn new(bounds: Bounds, n_individuals: usize, n_iterations: usize) -> Result<Self> {
        validate_population_size(n_individuals)?;

        let constraint_manager = ConstraintManager::new(&bounds);
        Ok(Self {
            bounds,
            n_individuals,
            iteration: 0,
            population: Vec::new(),
            best_individual: None,
            state: EngineState::Uninitialised,
            selection: Box::new(TournamentSelection::default()),
            crossover: Box::new(OnePointCrossover),
            mutation: Box::new(RandomMutation::default()),
            termination: Box::new(IterationTermination::new(n_iterations)),
            constraint_manager,
            history: History::new(),
            rng: RandomNumberGenerator::new(),
            elitism: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            cancel: None,
        })
    }

    /// Runs the full optimisation: reset, initialise, then iterate until
    /// the termination strategy fires.
    ///
    /// Returns the best feasible individual found across the whole run,
    /// not just the final generation.
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy fails mid-generation (for example an
    /// unevaluated fitness read), if the fitness function produces a
    /// non-finite value, or if the run completes without ever recording a
    /// feasible best.
    pub fn optimise<F>(&mut self, fitness_fn: &F) -> Result<Individual>
    where
        F: FitnessFunction,
    {
        self.reset_environment();
        self.initialise_population();

        loop {
            let status = self.status();
            if self.termination.termination_check(&status) {
                break;
            }
            if self.is_cancelled() {
                debug!(iteration = self.iteration, "optimisation cancelled");
                break;
            }

            self.step_optimise(fitness_fn)?;
            self.iteration += 1;
        }

        self.state = EngineState::Done;
        self.best_individual.clone().ok_or_else(|| {
            GeneticError::Optimisation(
                "optimisation finished without recording a feasible best individual".to_string(),
            )
        })
    }

    /// Progresses the optimisation by a single generation.
    ///
    /// Evaluates the whole population, offers feasible individuals to
    /// best-tracking, then builds the replacement population by repeated
    /// select/cross/mutate until the target size is reached.
    pub fn step_optimise<F>(&mut self, fitness_fn: &F) -> Result<()>
    where
        F: FitnessFunction,
    {
        self.evaluate_population(fitness_fn)?;

        for individual in &self.population {
            if !self.constraint_manager.violates_position(individual) {
                offer_best(&mut self.best_individual, individual);
            }
        }

        let mean_fitness = mean_fitness(&self.population)?;

        self.selection.preprocess(&self.population, &mut self.rng)?;

        let mut next_population = Vec::with_capacity(self.n_individuals);
        while next_population.len() < self.n_individuals {
            let parent_a = self.selection.select(&self.population, &mut self.rng)?;
            let parent_b = self.selection.select(&self.population, &mut self.rng)?;

            let (mut child_a, mut child_b) =
                self.crossover.cross(parent_a, parent_b, &mut self.rng)?;

            self.mutation.mutate(&mut child_a, &mut self.rng);
            self.mutation.mutate(&mut child_b, &mut self.rng);

            next_population.push(child_a);
            next_population.push(child_b);
        }

        // Elitism: the recorded best survives into the next generation
        // unchanged, so fitness-proportional drift cannot discard it.
        if self.elitism {
            if let Some(best) = &self.best_individual {
                next_population[0] = best.clone();
            }
        }

        self.population = next_population;

        if let Some(best_fitness) = self.best_individual.as_ref().and_then(|b| b.fitness) {
            self.history.write_record(best_fitness, mean_fitness);
            debug!(
                iteration = self.iteration,
                best_fitness, mean_fitness, "generation complete"
            );
        } else {
            trace!(
                iteration = self.iteration,
                "no feasible best yet; history record skipped"
            );
        }

        Ok(())
    }

    /// Resets the optimisation environment: iteration counter, population,
    /// best individual and history.
    pub fn reset_environment(&mut self) {
        self.iteration = 0;
        self.population.clear();
        self.best_individual = None;
        self.history.clear();
        self.state = EngineState::Uninitialised;
    }

    /// Generates the initial population of random individuals.
    pub fn initialise_population(&mut self) {
        self.population = (0..self.n_individuals)
            .map(|_| Individual::random(&self.bounds, &mut self.rng))
            .collect();
        self.state = EngineState::Running;
    }

    /// Offers an individual to best-tracking.
    ///
    /// The best is replaced only when unset or strictly improved upon, and
    /// is always stored as an independent copy: later mutation of live
    /// population members can never corrupt it. Idempotent for a given
    /// individual.
    pub fn update_best(&mut self, individual: &Individual) {
        offer_best(&mut self.best_individual, individual);
    }

    /// Evaluates the fitness of every individual in the population,
    /// in parallel when the population is large enough to benefit.
    fn evaluate_population<F>(&mut self, fitness_fn: &F) -> Result<()>
    where
        F: FitnessFunction,
    {
        if self.population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if self.population.len() >= self.parallel_threshold {
            // One result slot per individual, no shared writes; the
            // population itself is only read here.
            let scores: Vec<f64> = self
                .population
                .par_iter()
                .map(|individual| fitness_fn.evaluate(&individual.position))
                .collect();

            for (individual, score) in self.population.iter_mut().zip(scores) {
                check_finite(score)?;
                individual.fitness = Some(score);
            }
        } else {
            for individual in &mut self.population {
                let score = fitness_fn.evaluate(&individual.position);
                check_finite(score)?;
                individual.fitness = Some(score);
            }
        }

        Ok(())
    }

    /// Current snapshot consumed by termination checks.
    pub fn status(&self) -> OptimisationStatus {
        OptimisationStatus {
            iteration: self.iteration,
            best_fitness: self.best_individual.as_ref().and_then(|b| b.fitness),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    /// The best feasible individual found so far, if any.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.best_individual.as_ref()
    }

    /// Per-generation summary statistics recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Completed generation count.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The current population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The constraint manager, for registering feasibility predicates.
    pub fn constraint_manager_mut(&mut self) -> &mut ConstraintManager {
        &mut self.constraint_manager
    }

    /// The search-space bounds the engine was built with.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

pub(crate) fn validate_population_size(n_individuals: usize) -> Result<()> {
    if n_individuals == 0 {
        return Err(GeneticError::Configuration(
            "Population size cannot be zero".to_string(),
        ));
    }
    if n_individuals % 2 != 0 {
        return Err(GeneticError::Configuration(
            "Population size must be even".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn offer_best(best: &mut Option<Individual>, candidate: &Individual) {
    match best {
        None => *best = Some(candidate.clone()),
        Some(current) => {
            let improved = match (candidate.fitness, current.fitness) {
                (Some(new), Some(old)) => new < old,
                _ => false,
            };
            if improved {
                *best = Some(candidate.clone());
            }
        }
    }
}

pub(crate) fn mean_fitness(population: &[Individual]) -> Result<f64> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    let mut total = 0.0;
    for individual in population {
        total += individual.fitness()?;
    }
    Ok(total / population.len() as f64)
}

pub(crate) fn check_finite(score: f64) -> Result<()> {
    if !score.is_finite() {
        return Err(GeneticError::FitnessCalculation(format!(
            "Non-finite fitness score encountered: {}",
            score
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::from_pairs([("x0", (0.0, 10.0)), ("x1", (0.0, 10.0))])
    }

    fn individual_with_fitness(fitness: f64) -> Individual {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut individual = Individual::random(&bounds(), &mut rng);
        individual.fitness = Some(fitness);
        individual
    }

    #[test]
    fn test_rejects_odd_population() {
        let result = Soga::new(bounds(), 9, 10);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_rejects_zero_population() {
        let result = Soga::new(bounds(), 0, 10);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_reset_environment() {
        let mut engine = Soga::new(bounds(), 4, 10).unwrap();
        engine.initialise_population();
        engine.iteration = 5;
        engine.update_best(&individual_with_fitness(1.0));

        engine.reset_environment();

        assert_eq!(engine.iteration(), 0);
        assert!(engine.population().is_empty());
        assert!(engine.best_individual().is_none());
        assert!(engine.history().is_empty());
        assert_eq!(engine.state(), EngineState::Uninitialised);
    }

    #[test]
    fn test_initialise_population() {
        let mut engine = Soga::new(bounds(), 6, 10).unwrap();
        engine.initialise_population();

        assert_eq!(engine.population().len(), 6);
        assert_eq!(engine.state(), EngineState::Running);
        assert!(engine.population().iter().all(|i| i.fitness.is_none()));
    }

    #[test]
    fn test_update_best_is_idempotent() {
        let mut engine = Soga::new(bounds(), 4, 10).unwrap();
        let candidate = individual_with_fitness(2.0);

        engine.update_best(&candidate);
        let first = engine.best_individual().cloned();
        engine.update_best(&candidate);

        assert_eq!(engine.best_individual().cloned(), first);
    }

    #[test]
    fn test_update_best_rejects_worse() {
        let mut engine = Soga::new(bounds(), 4, 10).unwrap();
        engine.update_best(&individual_with_fitness(1.0));
        engine.update_best(&individual_with_fitness(5.0));

        assert_eq!(engine.best_individual().unwrap().fitness, Some(1.0));
    }

    #[test]
    fn test_update_best_stores_copy() {
        let mut engine = Soga::new(bounds(), 4, 10).unwrap();
        let mut candidate = individual_with_fitness(1.0);
        engine.update_best(&candidate);

        candidate.position[0] = 999.0;
        assert_ne!(engine.best_individual().unwrap().position[0], 999.0);
    }

    #[test]
    fn test_non_finite_fitness_fails() {
        let mut engine = Soga::new(bounds(), 4, 2).unwrap();
        let result = engine.optimise(&|_: &[f64]| f64::NAN);
        assert!(matches!(result, Err(GeneticError::FitnessCalculation(_))));
    }

    #[test]
    fn test_mean_fitness() {
        let population = vec![
            individual_with_fitness(1.0),
            individual_with_fitness(2.0),
            individual_with_fitness(3.0),
        ];
        assert!((mean_fitness(&population).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_fitness_unevaluated() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = vec![Individual::random(&bounds(), &mut rng)];
        assert!(matches!(
            mean_fitness(&population),
            Err(GeneticError::UnevaluatedFitness)
        ));
    }
}
