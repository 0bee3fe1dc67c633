//! # Bounds
//!
//! The `Bounds` struct describes the search space of an optimisation: an
//! ordered mapping from parameter name to a `(lower, upper)` pair. Its
//! length defines the dimensionality of every [`Individual`] created from
//! it, and the per-axis limits are retained by individuals so that
//! recombination operators can perform per-gene legality checks.
//!
//! [`Individual`]: crate::individual::Individual
//!
//! ## Example
//!
//! ```rust
//! use soga::bounds::Bounds;
//!
//! let bounds = Bounds::from_pairs([("x0", (0.0, 10.0)), ("x1", (-5.0, 5.0))]);
//! assert_eq!(bounds.len(), 2);
//! assert_eq!(bounds.names()[0], "x0");
//! ```

use crate::error::{GeneticError, Result};

/// An ordered mapping from parameter name to `(lower, upper)` bound.
///
/// Immutable for the lifetime of an optimisation run. Entries are assumed
/// to satisfy `lb <= ub`; this is not enforced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    names: Vec<String>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds from parallel name/lower/upper vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidBounds`] if the three vectors differ
    /// in length or are empty.
    pub fn new(names: Vec<String>, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if names.len() != lower.len() || lower.len() != upper.len() {
            return Err(GeneticError::InvalidBounds(format!(
                "names ({}), lower ({}) and upper ({}) must have equal lengths",
                names.len(),
                lower.len(),
                upper.len()
            )));
        }

        if names.is_empty() {
            return Err(GeneticError::InvalidBounds(
                "bounds must contain at least one parameter".to_string(),
            ));
        }

        Ok(Self {
            names,
            lower,
            upper,
        })
    }

    /// Creates bounds from an ordered sequence of `(name, (lb, ub))` pairs.
    ///
    /// This is the usual entry point; the pair form cannot produce
    /// mismatched vector lengths.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut lower = Vec::new();
        let mut upper = Vec::new();

        for (name, (lb, ub)) in pairs {
            names.push(name.into());
            lower.push(lb);
            upper.push(ub);
        }

        Self {
            names,
            lower,
            upper,
        }
    }

    /// The dimensionality of the search space.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no parameters are defined.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The parameter names, in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The lower bound of each axis.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// The upper bound of each axis.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}
