//! # Error Types
//!
//! This module defines the custom error types for the genetic algorithm
//! engine. Every configuration mistake is surfaced synchronously at
//! construction or registration time, so a misconfigured optimiser fails
//! before any fitness evaluation has been spent.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use soga::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
///
/// This enum provides specific error variants for the different failure
/// scenarios that may occur while configuring or running an optimisation.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when the bound vectors of a search space are
    /// inconsistent (for example mismatched lengths).
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// Error that occurs when an invalid configuration is provided, such as
    /// an odd population size or an out-of-range strategy parameter.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an individual's fitness is read before it has
    /// been evaluated.
    #[error("Unevaluated fitness: individual has not been evaluated yet")]
    UnevaluatedFitness,

    /// Error that occurs when a fitness calculation produces an unusable
    /// value (NaN or infinity).
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an optimisation run fails as a whole, for
    /// example when it completes without ever recording a feasible best.
    #[error("Optimisation error: {0}")]
    Optimisation(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use soga::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
