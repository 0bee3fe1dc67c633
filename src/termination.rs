//! # Termination Strategies
//!
//! A termination strategy decides, once per generation, whether the
//! optimisation loop should stop. The engine passes an
//! [`OptimisationStatus`] snapshot rather than a reference to itself, so
//! each strategy is an explicit, typed configuration instead of a manager
//! holding a back-pointer into the engine.
//!
//! ## Available strategies
//!
//! - [`IterationTermination`]: stop after a fixed number of generations.
//! - [`TimeTermination`]: stop once a wall-clock budget is spent.
//! - [`EvaluationTermination`]: stop after a fitness-evaluation budget.
//! - [`ErrorTermination`]: stop once the best fitness reaches a target.

use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Per-generation snapshot of the engine state consumed by termination
/// checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimisationStatus {
    /// Completed generation count (starts at 0).
    pub iteration: usize,
    /// Fitness of the best feasible individual found so far, if any.
    pub best_fitness: Option<f64>,
}

/// Trait for termination strategies.
///
/// `termination_check` is evaluated once per generation by the orchestrator
/// before starting the next generation's work; returning `true` ends the
/// run.
pub trait TerminationStrategy: Debug + Send {
    fn termination_check(&mut self, status: &OptimisationStatus) -> bool;
}

/// Terminates the optimisation process after `n_iterations`.
///
/// The check is strictly greater-than, so exactly `n_iterations + 1`
/// generations execute. A unit test pins this boundary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct IterationTermination {
    n_iterations: usize,
}

impl IterationTermination {
    pub fn new(n_iterations: usize) -> Self {
        Self { n_iterations }
    }
}

impl TerminationStrategy for IterationTermination {
    fn termination_check(&mut self, status: &OptimisationStatus) -> bool {
        status.iteration > self.n_iterations
    }
}

/// Terminates the optimisation process once a wall-clock budget is spent.
///
/// The start timestamp is recorded on the first check, not at
/// construction, so a strategy built ahead of time does not bill setup
/// work against the budget.
#[derive(Debug, Clone)]
pub struct TimeTermination {
    t_budget: Duration,
    t_start: Option<Instant>,
}

impl TimeTermination {
    pub fn new(t_budget: Duration) -> Self {
        Self {
            t_budget,
            t_start: None,
        }
    }
}

impl TerminationStrategy for TimeTermination {
    fn termination_check(&mut self, _status: &OptimisationStatus) -> bool {
        let start = *self.t_start.get_or_insert_with(Instant::now);
        start.elapsed() > self.t_budget
    }
}

/// Terminates the optimisation process after a fitness-evaluation budget.
///
/// The budget is converted into an equivalent iteration budget by integer
/// division with the population size, then behaves exactly like
/// [`IterationTermination`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvaluationTermination {
    n_iterations: usize,
}

impl EvaluationTermination {
    pub fn new(n_evaluations: usize, n_individuals: usize) -> Self {
        Self {
            n_iterations: n_evaluations / n_individuals,
        }
    }
}

impl TerminationStrategy for EvaluationTermination {
    fn termination_check(&mut self, status: &OptimisationStatus) -> bool {
        status.iteration > self.n_iterations
    }
}

/// Terminates the optimisation process once the best fitness is within
/// `target ± threshold`.
///
/// Never terminates while no feasible best individual has been recorded.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ErrorTermination {
    target: f64,
    threshold: f64,
}

impl ErrorTermination {
    pub fn new(target: f64, threshold: f64) -> Self {
        Self { target, threshold }
    }

    fn in_threshold(&self, value: f64) -> bool {
        self.target - self.threshold < value && value < self.target + self.threshold
    }
}

impl TerminationStrategy for ErrorTermination {
    fn termination_check(&mut self, status: &OptimisationStatus) -> bool {
        match status.best_fitness {
            Some(best) => self.in_threshold(best),
            None => false,
        }
    }
}
