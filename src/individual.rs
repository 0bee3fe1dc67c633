//! # Individual
//!
//! The `Individual` struct is a single candidate solution: a position
//! vector inside the search space plus an optional fitness scalar. It has
//! no behaviour of its own beyond construction; selection, crossover and
//! mutation strategies operate on it.
//!
//! Individuals are value-like. Everything that must not alias shared state
//! (selection results, the engine's recorded best) works on owned clones,
//! so later mutation of live population members can never corrupt a copy
//! that has already been handed out.
//!
//! ## Example
//!
//! ```rust
//! use soga::bounds::Bounds;
//! use soga::individual::Individual;
//! use soga::rng::RandomNumberGenerator;
//!
//! let bounds = Bounds::from_pairs([("x", (0.0, 10.0)), ("y", (0.0, 10.0))]);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let individual = Individual::random(&bounds, &mut rng);
//! assert_eq!(individual.position.len(), 2);
//! assert!(individual.fitness.is_none());
//! ```

use crate::bounds::Bounds;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A single candidate solution: position vector plus optional fitness.
///
/// The bound vectors the individual was created with are retained so that
/// recombination operators can perform per-gene legality checks. The
/// position is drawn inside the bounds at construction time but is NOT
/// re-clamped after crossover or mutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Current position of the individual in the search space.
    pub position: Vec<f64>,
    /// Fitness of the current position; `None` until evaluated.
    pub fitness: Option<f64>,
    lb: Vec<f64>,
    ub: Vec<f64>,
}

impl Individual {
    /// Creates an individual whose position is drawn uniformly at random,
    /// independently per axis, from `[lb[i], ub[i]]`.
    ///
    /// The fitness starts unset.
    pub fn random(bounds: &Bounds, rng: &mut RandomNumberGenerator) -> Self {
        let position = bounds
            .lower()
            .iter()
            .zip(bounds.upper())
            .map(|(&lb, &ub)| {
                if lb == ub {
                    lb
                } else {
                    rng.gen_range(lb..ub)
                }
            })
            .collect();

        Self {
            position,
            fitness: None,
            lb: bounds.lower().to_vec(),
            ub: bounds.upper().to_vec(),
        }
    }

    /// Returns the evaluated fitness.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::UnevaluatedFitness`] if the individual has
    /// not been evaluated yet. Reading fitness before evaluation is a
    /// programming error, never a stale numeric default.
    pub fn fitness(&self) -> Result<f64> {
        self.fitness.ok_or(GeneticError::UnevaluatedFitness)
    }

    /// The lower bound of each axis, as captured at construction.
    pub fn lb(&self) -> &[f64] {
        &self.lb
    }

    /// The upper bound of each axis, as captured at construction.
    pub fn ub(&self) -> &[f64] {
        &self.ub
    }
}
