use crate::crossover::{check_dimensions, CrossoverStrategy};
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Uniform crossover.
///
/// Every gene is swapped between the parents independently with
/// probability `p_swap`. When no probability is supplied the default is
/// `1/D`, forced to `0.5` for one-dimensional problems. Construction
/// rejects `p_swap > 0.5`: a swap probability above one-half is redundant
/// with the complementary assignment and signals caller error.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::crossover::{CrossoverStrategy, UniformCrossover};
/// use soga::individual::Individual;
/// use soga::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::from_pairs([("x", (0.0, 1.0)), ("y", (0.0, 1.0))]);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let parent_a = Individual::random(&bounds, &mut rng);
/// let parent_b = Individual::random(&bounds, &mut rng);
///
/// let crossover = UniformCrossover::new(0.3).unwrap();
/// let (child_a, child_b) = crossover.cross(parent_a, parent_b, &mut rng).unwrap();
/// assert_eq!(child_a.position.len(), 2);
/// assert_eq!(child_b.position.len(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct UniformCrossover {
    p_swap: Option<f64>,
}

impl UniformCrossover {
    /// Creates a uniform crossover with an explicit swap probability.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `p_swap > 0.5`.
    pub fn new(p_swap: f64) -> Result<Self> {
        if p_swap > 0.5 {
            return Err(GeneticError::Configuration(
                "p_swap must be <= 0.5".to_string(),
            ));
        }

        Ok(Self {
            p_swap: Some(p_swap),
        })
    }

    /// The effective swap probability for a given dimensionality.
    fn effective_p_swap(&self, dim: usize) -> f64 {
        if dim == 1 {
            return 0.5;
        }
        self.p_swap.unwrap_or(1.0 / dim as f64)
    }
}

impl CrossoverStrategy for UniformCrossover {
    fn cross(
        &self,
        mut parent_a: Individual,
        mut parent_b: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        check_dimensions(&parent_a, &parent_b)?;

        let dim = parent_a.position.len();
        let p_swap = self.effective_p_swap(dim);

        for i in 0..dim {
            if rng.gen_range(0.0..1.0) < p_swap {
                std::mem::swap(&mut parent_a.position[i], &mut parent_b.position[i]);
            }
        }

        Ok((parent_a, parent_b))
    }
}
