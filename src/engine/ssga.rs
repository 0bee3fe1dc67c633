use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::bounds::Bounds;
use crate::constraints::ConstraintManager;
use crate::crossover::{CrossoverStrategy, OnePointCrossover};
use crate::engine::fitness::FitnessFunction;
use crate::engine::soga::{
    check_finite, mean_fitness, offer_best, validate_population_size, EngineState,
};
use crate::error::{GeneticError, Result};
use crate::history::History;
use crate::individual::Individual;
use crate::mutation::{MutationStrategy, RandomMutation};
use crate::rng::RandomNumberGenerator;
use crate::selection::{SelectionStrategy, TournamentSelection};
use crate::termination::{IterationTermination, OptimisationStatus, TerminationStrategy};

/// The steady-state single-objective GA engine.
///
/// Differs from [`Soga`](crate::engine::Soga) only in replacement policy:
/// the whole population is evaluated once up front, then each iteration
/// breeds exactly one child pair, evaluates it immediately, removes two
/// distinct uniformly-random incumbents and inserts the children. The
/// population size stays constant while the population turns over
/// gradually instead of being replaced wholesale.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::engine::Ssga;
///
/// let bounds = Bounds::from_pairs([("x0", (0.0, 10.0)), ("x1", (0.0, 10.0))]);
/// let mut engine = Ssga::new(bounds, 10, 50).unwrap();
///
/// let best = engine
///     .optimise(&|position: &[f64]| position.iter().map(|x| x * x).sum::<f64>())
///     .unwrap();
/// assert!(best.fitness.is_some());
/// ```
#[derive(Debug)]
pub struct Ssga {
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
    pub(crate) cancel: Option<Arc<AtomicBool>>,
}

impl Ssga {
    /// Creates a steady-state engine with the default strategy set:
    /// tournament selection, one-point crossover, random mutation and
    /// iteration-based termination.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `n_individuals` is zero
    /// or odd.
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
            cancel: None,
        })
    }

    /// Runs the full optimisation.
    ///
    /// The initial population is evaluated (and offered to best-tracking,
    /// gated by constraints) before the loop; each subsequent iteration
    /// touches only the two new children.
    pub fn optimise<F>(&mut self, fitness_fn: &F) -> Result<Individual>
    where
        F: FitnessFunction,
    {
        self.reset_environment();
        self.initialise_population();

        for individual in &mut self.population {
            let score = fitness_fn.evaluate(&individual.position);
            check_finite(score)?;
            individual.fitness = Some(score);
        }
        for individual in &self.population {
            if !self.constraint_manager.violates_position(individual) {
                offer_best(&mut self.best_individual, individual);
            }
        }

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

    /// Progresses the optimisation by a single iteration: one child pair
    /// bred, evaluated and spliced in place of two random incumbents.
    pub fn step_optimise<F>(&mut self, fitness_fn: &F) -> Result<()>
    where
        F: FitnessFunction,
    {
        self.selection.preprocess(&self.population, &mut self.rng)?;

        let parent_a = self.selection.select(&self.population, &mut self.rng)?;
        let parent_b = self.selection.select(&self.population, &mut self.rng)?;

        let (mut child_a, mut child_b) = self.crossover.cross(parent_a, parent_b, &mut self.rng)?;

        self.mutation.mutate(&mut child_a, &mut self.rng);
        self.mutation.mutate(&mut child_b, &mut self.rng);

        for child in [&mut child_a, &mut child_b] {
            let score = fitness_fn.evaluate(&child.position);
            check_finite(score)?;
            child.fitness = Some(score);
            if !self.constraint_manager.violates_position(child) {
                offer_best(&mut self.best_individual, child);
            }
        }

        self.replace_random_pair(child_a, child_b)?;

        let mean = mean_fitness(&self.population)?;
        if let Some(best_fitness) = self.best_individual.as_ref().and_then(|b| b.fitness) {
            self.history.write_record(best_fitness, mean);
            debug!(
                iteration = self.iteration,
                best_fitness,
                mean_fitness = mean,
                "steady-state iteration complete"
            );
        }

        Ok(())
    }

    /// Removes two distinct uniformly-random incumbents and inserts the
    /// children in their place.
    fn replace_random_pair(&mut self, child_a: Individual, child_b: Individual) -> Result<()> {
        if self.population.len() < 2 {
            return Err(GeneticError::EmptyPopulation);
        }

        let idx_first = self.rng.gen_range(0..self.population.len());
        let mut idx_second = self.rng.gen_range(0..self.population.len());
        while idx_second == idx_first {
            idx_second = self.rng.gen_range(0..self.population.len());
        }

        // Remove the higher index first so the lower one stays valid
        let (hi, lo) = if idx_first > idx_second {
            (idx_first, idx_second)
        } else {
            (idx_second, idx_first)
        };
        self.population.remove(hi);
        self.population.remove(lo);

        self.population.push(child_a);
        self.population.push(child_b);
        Ok(())
    }

    /// Resets the optimisation environment.
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

    /// Per-iteration summary statistics recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Completed iteration count.
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
}
