use crate::crossover::{check_dimensions, CrossoverStrategy};
use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Two-point crossover.
///
/// Draws two indices `c` and `d` uniformly from `[1, D]` inclusive, orders
/// them and swaps the half-open interval `[c, d)` between the parents.
/// `c == d` yields no swap.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::crossover::{CrossoverStrategy, TwoPointCrossover};
/// use soga::individual::Individual;
/// use soga::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::from_pairs([("x", (0.0, 1.0)), ("y", (0.0, 1.0)), ("z", (0.0, 1.0))]);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let parent_a = Individual::random(&bounds, &mut rng);
/// let parent_b = Individual::random(&bounds, &mut rng);
///
/// let crossover = TwoPointCrossover;
/// let (child_a, child_b) = crossover.cross(parent_a, parent_b, &mut rng).unwrap();
/// assert_eq!(child_a.position.len(), 3);
/// assert_eq!(child_b.position.len(), 3);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct TwoPointCrossover;

impl CrossoverStrategy for TwoPointCrossover {
    fn cross(
        &self,
        mut parent_a: Individual,
        mut parent_b: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        check_dimensions(&parent_a, &parent_b)?;

        let dim = parent_a.position.len();
        let mut c = rng.gen_range(1..=dim);
        let mut d = rng.gen_range(1..=dim);

        if c > d {
            std::mem::swap(&mut c, &mut d);
        }

        for i in c..d {
            std::mem::swap(&mut parent_a.position[i], &mut parent_b.position[i]);
        }

        Ok((parent_a, parent_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;

    fn parents(dim: usize) -> (Individual, Individual) {
        let bounds = Bounds::from_pairs((0..dim).map(|i| (format!("x{i}"), (0.0, 10.0))));
        let mut rng = RandomNumberGenerator::from_seed(2);
        (
            Individual::random(&bounds, &mut rng),
            Individual::random(&bounds, &mut rng),
        )
    }

    fn multiset(values: &[f64]) -> Vec<u64> {
        let mut bits: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
        bits.sort_unstable();
        bits
    }

    #[test]
    fn test_preserves_gene_multiset() {
        for seed in 0..50 {
            let (parent_a, parent_b) = parents(5);
            let mut all_before: Vec<f64> = parent_a.position.clone();
            all_before.extend_from_slice(&parent_b.position);

            let mut rng = RandomNumberGenerator::from_seed(seed);
            let (child_a, child_b) = TwoPointCrossover
                .cross(parent_a, parent_b, &mut rng)
                .unwrap();

            let mut all_after: Vec<f64> = child_a.position.clone();
            all_after.extend_from_slice(&child_b.position);

            assert_eq!(multiset(&all_before), multiset(&all_after));
        }
    }

    #[test]
    fn test_first_gene_never_swapped() {
        // Cut points are drawn from [1, D], so gene 0 always stays put.
        for seed in 0..50 {
            let (parent_a, parent_b) = parents(4);
            let first_a = parent_a.position[0];
            let first_b = parent_b.position[0];

            let mut rng = RandomNumberGenerator::from_seed(seed);
            let (child_a, child_b) = TwoPointCrossover
                .cross(parent_a, parent_b, &mut rng)
                .unwrap();

            assert_eq!(child_a.position[0], first_a);
            assert_eq!(child_b.position[0], first_b);
        }
    }

    #[test]
    fn test_swapped_region_is_contiguous() {
        let (parent_a, parent_b) = parents(8);
        let pa = parent_a.position.clone();
        let pb = parent_b.position.clone();

        let mut rng = RandomNumberGenerator::from_seed(17);
        let (child_a, _) = TwoPointCrossover
            .cross(parent_a, parent_b, &mut rng)
            .unwrap();

        let swapped: Vec<usize> = (0..pa.len())
            .filter(|&i| child_a.position[i] == pb[i] && pa[i] != pb[i])
            .collect();

        if let (Some(&first), Some(&last)) = (swapped.first(), swapped.last()) {
            assert_eq!(swapped, (first..=last).collect::<Vec<usize>>());
        }
    }
}
