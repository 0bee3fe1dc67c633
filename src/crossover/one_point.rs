use crate::crossover::{check_dimensions, CrossoverStrategy};
use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// One-point crossover.
///
/// Draws a cut index `c` uniformly from `[0, D]` inclusive and swaps every
/// gene at index `i >= c` between the parents. `c == 0` yields no swap at
/// all, as does `c == D`; both ends of the range are valid outcomes.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::crossover::{CrossoverStrategy, OnePointCrossover};
/// use soga::individual::Individual;
/// use soga::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::from_pairs([("x", (0.0, 1.0)), ("y", (0.0, 1.0))]);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let parent_a = Individual::random(&bounds, &mut rng);
/// let parent_b = Individual::random(&bounds, &mut rng);
///
/// let crossover = OnePointCrossover;
/// let (child_a, child_b) = crossover.cross(parent_a, parent_b, &mut rng).unwrap();
/// assert_eq!(child_a.position.len(), 2);
/// assert_eq!(child_b.position.len(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct OnePointCrossover;

impl CrossoverStrategy for OnePointCrossover {
    fn cross(
        &self,
        mut parent_a: Individual,
        mut parent_b: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        check_dimensions(&parent_a, &parent_b)?;

        let dim = parent_a.position.len();
        let c = rng.gen_range(0..=dim);

        // c == 0 is an explicit no-op, not a whole-vector swap
        if c != 0 {
            for i in c..dim {
                std::mem::swap(&mut parent_a.position[i], &mut parent_b.position[i]);
            }
        }

        Ok((parent_a, parent_b))
    }
}
