//! # Constraints Module
//!
//! This module provides the feasibility layer of the engine. Callers
//! register position constraints (predicates over a named-position mapping)
//! with a [`ConstraintManager`]; each generation the orchestrator asks the
//! manager whether an individual violates any constraint before offering it
//! to best-tracking. Infeasible individuals still participate in selection
//! and breeding; they are only barred from becoming the recorded best.
//!
//! ## Basic usage
//!
//! ```rust
//! use soga::bounds::Bounds;
//! use soga::constraints::{ConstraintManager, FnConstraint};
//! use soga::individual::Individual;
//! use soga::rng::RandomNumberGenerator;
//!
//! let bounds = Bounds::from_pairs([("x", (0.0, 10.0)), ("y", (0.0, 10.0))]);
//! let mut manager = ConstraintManager::new(&bounds);
//!
//! // Feasible iff x + y <= 15
//! manager.register_constraint(FnConstraint::new("budget", |position| {
//!     position["x"] + position["y"] <= 15.0
//! }));
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let individual = Individual::random(&bounds, &mut rng);
//! let _feasible = !manager.violates_position(&individual);
//! ```

use std::collections::HashMap;
use std::fmt::Debug;

use crate::bounds::Bounds;
use crate::individual::Individual;

/// A named view of an individual's position: parameter name to gene value.
pub type NamedPosition = HashMap<String, f64>;

/// Trait for position-feasibility predicates.
///
/// `constrain` returns `true` when the position satisfies the constraint.
/// Conformance is enforced by the type system: only implementors can be
/// registered, so there is no runtime capability check.
pub trait PositionConstraint: Debug + Send + Sync {
    fn constrain(&self, position: &NamedPosition) -> bool;
}

/// Adapter that lets a plain closure act as a [`PositionConstraint`].
pub struct FnConstraint<F>
where
    F: Fn(&NamedPosition) -> bool + Send + Sync,
{
    name: String,
    predicate: F,
}

impl<F> FnConstraint<F>
where
    F: Fn(&NamedPosition) -> bool + Send + Sync,
{
    pub fn new<S: Into<String>>(name: S, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> Debug for FnConstraint<F>
where
    F: Fn(&NamedPosition) -> bool + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConstraint")
            .field("name", &self.name)
            .finish()
    }
}

impl<F> PositionConstraint for FnConstraint<F>
where
    F: Fn(&NamedPosition) -> bool + Send + Sync,
{
    fn constrain(&self, position: &NamedPosition) -> bool {
        (self.predicate)(position)
    }
}

/// Manages an ordered list of position constraints and evaluates them
/// against individuals.
#[derive(Debug)]
pub struct ConstraintManager {
    pnames: Vec<String>,
    constraints: Vec<Box<dyn PositionConstraint>>,
}

impl ConstraintManager {
    /// Creates an empty manager for the given search space. The bounds
    /// provide the parameter names used to build named positions.
    pub fn new(bounds: &Bounds) -> Self {
        Self {
            pnames: bounds.names().to_vec(),
            constraints: Vec::new(),
        }
    }

    /// Registers a constraint; constraints are evaluated in registration
    /// order.
    pub fn register_constraint<C>(&mut self, constraint: C) -> &mut Self
    where
        C: PositionConstraint + 'static,
    {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Checks whether the individual's position violates any registered
    /// constraint.
    ///
    /// Returns `true` (violated) on the first constraint that reports
    /// not-satisfied, `false` if the list is empty or every constraint
    /// passes.
    pub fn violates_position(&self, individual: &Individual) -> bool {
        if self.constraints.is_empty() {
            return false;
        }

        let position: NamedPosition = self
            .pnames
            .iter()
            .cloned()
            .zip(individual.position.iter().copied())
            .collect();

        self.constraints
            .iter()
            .any(|constraint| !constraint.constrain(&position))
    }

    /// Returns the number of registered constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns `true` if the manager has no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;

    fn bounds() -> Bounds {
        Bounds::from_pairs([("x", (0.0, 10.0)), ("y", (0.0, 10.0))])
    }

    fn individual_at(x: f64, y: f64) -> Individual {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut individual = Individual::random(&bounds(), &mut rng);
        individual.position = vec![x, y];
        individual
    }

    #[test]
    fn test_empty_manager_never_violates() {
        let manager = ConstraintManager::new(&bounds());
        assert!(!manager.violates_position(&individual_at(100.0, -100.0)));
    }

    #[test]
    fn test_satisfied_constraint() {
        let bounds = bounds();
        let mut manager = ConstraintManager::new(&bounds);
        manager.register_constraint(FnConstraint::new("sum", |p: &NamedPosition| {
            p["x"] + p["y"] <= 15.0
        }));

        assert!(!manager.violates_position(&individual_at(5.0, 5.0)));
        assert!(manager.violates_position(&individual_at(9.0, 9.0)));
    }

    #[test]
    fn test_first_violation_wins() {
        let bounds = bounds();
        let mut manager = ConstraintManager::new(&bounds);
        manager
            .register_constraint(FnConstraint::new("always", |_: &NamedPosition| false))
            .register_constraint(FnConstraint::new("never", |_: &NamedPosition| true));

        assert!(manager.violates_position(&individual_at(0.0, 0.0)));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_named_position_maps_in_order() {
        let bounds = bounds();
        let mut manager = ConstraintManager::new(&bounds);
        manager.register_constraint(FnConstraint::new("check-names", |p: &NamedPosition| {
            p["x"] == 1.0 && p["y"] == 2.0
        }));

        assert!(!manager.violates_position(&individual_at(1.0, 2.0)));
        assert!(manager.violates_position(&individual_at(2.0, 1.0)));
    }
}
