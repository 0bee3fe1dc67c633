use crate::individual::Individual;

/// Trait for the caller-supplied fitness function.
///
/// The fitness is a cost: lower is better. The function is treated as an
/// opaque external collaborator; it should be pure for a given position if
/// runs are to be reproducible, and it is called exactly once per
/// individual per generation (twice per iteration for the steady-state
/// engine's child pair).
///
/// A blanket implementation covers plain closures, so most callers never
/// implement this trait by hand:
///
/// ```rust
/// use soga::engine::FitnessFunction;
///
/// let sphere = |position: &[f64]| position.iter().map(|x| x * x).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]), 25.0);
/// ```
pub trait FitnessFunction: Send + Sync {
    /// Evaluates the cost of a position vector.
    fn evaluate(&self, position: &[f64]) -> f64;

    /// Convenience wrapper evaluating an individual's current position.
    fn evaluate_individual(&self, individual: &Individual) -> f64 {
        self.evaluate(&individual.position)
    }
}

impl<F> FitnessFunction for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, position: &[f64]) -> f64 {
        self(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;
    use crate::rng::RandomNumberGenerator;

    #[test]
    fn test_closure_blanket_impl() {
        let sum = |position: &[f64]| position.iter().sum::<f64>();
        assert_eq!(sum.evaluate(&[1.0, 2.0, 3.0]), 6.0);
    }

    #[test]
    fn test_evaluate_individual_uses_position() {
        let bounds = Bounds::from_pairs([("x", (2.0, 2.0))]);
        let mut rng = RandomNumberGenerator::from_seed(1);
        let individual = Individual::random(&bounds, &mut rng);

        let double = |position: &[f64]| 2.0 * position[0];
        assert_eq!(double.evaluate_individual(&individual), 4.0);
    }
}
