//! # soga
//!
//! A single-objective genetic-algorithm minimisation engine with pluggable
//! selection, crossover, mutation and termination strategies.
//!
//! Fitness is a cost: lower is always better. Two engines are provided:
//! [`Soga`](engine::Soga) replaces the whole population each generation
//! (with elitism on by default), while [`Ssga`](engine::Ssga) turns the
//! population over two individuals at a time.
//!
//! ```
//! use soga::bounds::Bounds;
//! use soga::engine::SogaBuilder;
//!
//! let bounds = Bounds::from_pairs([("x0", (0.0, 10.0)), ("x1", (0.0, 10.0))]);
//! let mut engine = SogaBuilder::new(bounds, 10, 50)
//!     .with_seed(42)
//!     .build()
//!     .unwrap();
//!
//! let best = engine
//!     .optimise(&|p: &[f64]| p.iter().map(|x| x * x).sum::<f64>())
//!     .unwrap();
//! println!("best position: {:?}", best.position);
//! ```

pub mod bounds;
pub mod constraints;
pub mod crossover;
pub mod engine;
pub mod error;
pub mod history;
pub mod individual;
pub mod mutation;
pub mod rng;
pub mod selection;
pub mod termination;

// Re-export commonly used types for convenience
pub use error::{GeneticError, Result};
