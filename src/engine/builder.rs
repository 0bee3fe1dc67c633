use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::bounds::Bounds;
use crate::crossover::CrossoverStrategy;
use crate::engine::soga::Soga;
use crate::engine::ssga::Ssga;
use crate::error::Result;
use crate::mutation::MutationStrategy;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;
use crate::termination::TerminationStrategy;

/// Builder for the generational engine.
///
/// Every strategy slot has a sensible default, so only the pieces that
/// differ from a stock run need to be named:
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::engine::SogaBuilder;
/// use soga::selection::TournamentSelection;
///
/// let bounds = Bounds::from_pairs([("x0", (0.0, 10.0)), ("x1", (0.0, 10.0))]);
/// let mut engine = SogaBuilder::new(bounds, 10, 100)
///     .with_selection(TournamentSelection::new(3).unwrap())
///     .with_seed(42)
///     .build()
///     .unwrap();
///
/// let best = engine
///     .optimise(&|p: &[f64]| p.iter().map(|x| x * x).sum::<f64>())
///     .unwrap();
/// assert!(best.fitness.is_some());
/// ```
#[derive(Debug)]
pub struct SogaBuilder {
    bounds: Bounds,
    n_individuals: usize,
    n_iterations: usize,
    selection: Option<Box<dyn SelectionStrategy>>,
    crossover: Option<Box<dyn CrossoverStrategy>>,
    mutation: Option<Box<dyn MutationStrategy>>,
    termination: Option<Box<dyn TerminationStrategy>>,
    elitism: Option<bool>,
    parallel_threshold: Option<usize>,
    rng: Option<RandomNumberGenerator>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SogaBuilder {
    pub fn new(bounds: Bounds, n_individuals: usize, n_iterations: usize) -> Self {
        Self {
            bounds,
            n_individuals,
            n_iterations,
            selection: None,
            crossover: None,
            mutation: None,
            termination: None,
            elitism: None,
            parallel_threshold: None,
            rng: None,
            cancel: None,
        }
    }

    /// Replaces the default tournament selection.
    pub fn with_selection<S: SelectionStrategy + 'static>(mut self, selection: S) -> Self {
        self.selection = Some(Box::new(selection));
        self
    }

    /// Replaces the default one-point crossover.
    pub fn with_crossover<C: CrossoverStrategy + 'static>(mut self, crossover: C) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    /// Replaces the default random scalar mutation.
    pub fn with_mutation<M: MutationStrategy + 'static>(mut self, mutation: M) -> Self {
        self.mutation = Some(Box::new(mutation));
        self
    }

    /// Replaces the default iteration-count termination. The iteration
    /// budget passed to [`SogaBuilder::new`] is ignored when a custom
    /// termination strategy is set.
    pub fn with_termination<T: TerminationStrategy + 'static>(mut self, termination: T) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Enables or disables elitism (on by default).
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = Some(elitism);
        self
    }

    /// Population size above which fitness evaluation runs in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Seeds the engine's RNG for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(RandomNumberGenerator::from_seed(seed));
        self
    }

    /// Supplies a pre-built RNG.
    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Installs a cooperative cancellation flag, checked once per
    /// generation boundary.
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`](crate::error::GeneticError)
    /// if the population size is zero or odd, or the bounds are invalid.
    pub fn build(self) -> Result<Soga> {
        let mut engine = Soga::new(self.bounds, self.n_individuals, self.n_iterations)?;
        if let Some(selection) = self.selection {
            engine.selection = selection;
        }
        if let Some(crossover) = self.crossover {
            engine.crossover = crossover;
        }
        if let Some(mutation) = self.mutation {
            engine.mutation = mutation;
        }
        if let Some(termination) = self.termination {
            engine.termination = termination;
        }
        if let Some(elitism) = self.elitism {
            engine.elitism = elitism;
        }
        if let Some(threshold) = self.parallel_threshold {
            engine.parallel_threshold = threshold;
        }
        if let Some(rng) = self.rng {
            engine.rng = rng;
        }
        engine.cancel = self.cancel;
        Ok(engine)
    }
}

/// Builder for the steady-state engine. Mirrors [`SogaBuilder`] minus the
/// slots that only make sense for generational replacement (elitism and
/// parallel whole-population evaluation).
#[derive(Debug)]
pub struct SsgaBuilder {
    bounds: Bounds,
    n_individuals: usize,
    n_iterations: usize,
    selection: Option<Box<dyn SelectionStrategy>>,
    crossover: Option<Box<dyn CrossoverStrategy>>,
    mutation: Option<Box<dyn MutationStrategy>>,
    termination: Option<Box<dyn TerminationStrategy>>,
    rng: Option<RandomNumberGenerator>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SsgaBuilder {
    pub fn new(bounds: Bounds, n_individuals: usize, n_iterations: usize) -> Self {
        Self {
            bounds,
            n_individuals,
            n_iterations,
            selection: None,
            crossover: None,
            mutation: None,
            termination: None,
            rng: None,
            cancel: None,
        }
    }

    /// Replaces the default tournament selection.
    pub fn with_selection<S: SelectionStrategy + 'static>(mut self, selection: S) -> Self {
        self.selection = Some(Box::new(selection));
        self
    }

    /// Replaces the default one-point crossover.
    pub fn with_crossover<C: CrossoverStrategy + 'static>(mut self, crossover: C) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    /// Replaces the default random scalar mutation.
    pub fn with_mutation<M: MutationStrategy + 'static>(mut self, mutation: M) -> Self {
        self.mutation = Some(Box::new(mutation));
        self
    }

    /// Replaces the default iteration-count termination.
    pub fn with_termination<T: TerminationStrategy + 'static>(mut self, termination: T) -> Self {
        self.termination = Some(Box::new(termination));
        self
    }

    /// Seeds the engine's RNG for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(RandomNumberGenerator::from_seed(seed));
        self
    }

    /// Supplies a pre-built RNG.
    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Installs a cooperative cancellation flag, checked once per
    /// iteration boundary.
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`](crate::error::GeneticError)
    /// if the population size is zero or odd, or the bounds are invalid.
    pub fn build(self) -> Result<Ssga> {
        let mut engine = Ssga::new(self.bounds, self.n_individuals, self.n_iterations)?;
        if let Some(selection) = self.selection {
            engine.selection = selection;
        }
        if let Some(crossover) = self.crossover {
            engine.crossover = crossover;
        }
        if let Some(mutation) = self.mutation {
            engine.mutation = mutation;
        }
        if let Some(termination) = self.termination {
            engine.termination = termination;
        }
        if let Some(rng) = self.rng {
            engine.rng = rng;
        }
        engine.cancel = self.cancel;
        Ok(engine)
    }
}
