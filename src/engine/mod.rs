//! # GA Engines
//!
//! This module contains the orchestrators that compose the strategy
//! framework into a full optimisation run, plus the [`FitnessFunction`]
//! contract callers implement.
//!
//! Two replacement policies are provided as distinct engines rather than a
//! runtime branch:
//!
//! - [`Soga`]: the generational engine. Each generation it evaluates the
//!   whole population, breeds a complete replacement population and swaps
//!   it in. Elitism is on by default: the recorded best is carried forward
//!   unchanged so it can never be lost to selection drift.
//! - [`Ssga`]: the steady-state engine. Each iteration it breeds a single
//!   child pair, evaluates the children immediately and splices them in
//!   place of two random incumbents, so the population turns over
//!   gradually.

pub mod builder;
pub mod fitness;
pub mod soga;
pub mod ssga;

pub use builder::{SogaBuilder, SsgaBuilder};
pub use fitness::FitnessFunction;
pub use soga::{EngineState, Soga};
pub use ssga::Ssga;
