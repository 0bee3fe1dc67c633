use crate::crossover::{check_dimensions, CrossoverStrategy};
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

fn validate_p(p: f64) -> Result<f64> {
    if p <= 0.0 {
        return Err(GeneticError::Configuration("p must be > 0".to_string()));
    }
    Ok(p)
}

fn in_bounds(value: f64, lb: f64, ub: f64) -> bool {
    value >= lb && value <= ub
}

/// Blends one gene pair with coefficients `a` and `b`; overwrites the genes
/// only if both blended values stay within that gene's bounds.
fn blend_gene(
    parent_a: &mut Individual,
    parent_b: &mut Individual,
    i: usize,
    a: f64,
    b: f64,
) {
    let gene_a = parent_a.position[i];
    let gene_b = parent_b.position[i];

    let t = a * gene_a + (1.0 - a) * gene_b;
    let s = b * gene_b + (1.0 - b) * gene_a;

    let (lb, ub) = (parent_a.lb()[i], parent_a.ub()[i]);
    if in_bounds(t, lb, ub) && in_bounds(s, lb, ub) {
        parent_a.position[i] = t;
        parent_b.position[i] = s;
    }
}

/// Line recombination.
///
/// Draws one coefficient pair `a, b` uniformly from `[-p, 1 + p]` and
/// blends every gene with it, so all offspring genes lie on one line
/// between the parents. A blended gene pair is accepted only when both
/// values stay within the gene's bounds; otherwise that gene is left
/// unchanged.
///
/// # Examples
///
/// ```
/// use soga::bounds::Bounds;
/// use soga::crossover::{CrossoverStrategy, LineRecombination};
/// use soga::individual::Individual;
/// use soga::rng::RandomNumberGenerator;
///
/// let bounds = Bounds::from_pairs([("x", (0.0, 1.0)), ("y", (0.0, 1.0))]);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let parent_a = Individual::random(&bounds, &mut rng);
/// let parent_b = Individual::random(&bounds, &mut rng);
///
/// let recombination = LineRecombination::default();
/// let (child_a, child_b) = recombination.cross(parent_a, parent_b, &mut rng).unwrap();
/// assert!(child_a.position.iter().all(|&g| (0.0..=1.0).contains(&g)));
/// assert!(child_b.position.iter().all(|&g| (0.0..=1.0).contains(&g)));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct LineRecombination {
    p: f64,
}

impl LineRecombination {
    /// Creates a line recombination with blend range `[-p, 1 + p]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `p <= 0`.
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self { p: validate_p(p)? })
    }
}

impl Default for LineRecombination {
    fn default() -> Self {
        // Safe to unwrap because the default parameter is valid
        Self::new(0.25).unwrap()
    }
}

impl CrossoverStrategy for LineRecombination {
    fn cross(
        &self,
        mut parent_a: Individual,
        mut parent_b: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        check_dimensions(&parent_a, &parent_b)?;

        // One coefficient pair reused across all genes
        let a = rng.gen_range(-self.p..1.0 + self.p);
        let b = rng.gen_range(-self.p..1.0 + self.p);

        for i in 0..parent_a.position.len() {
            blend_gene(&mut parent_a, &mut parent_b, i, a, b);
        }

        Ok((parent_a, parent_b))
    }
}

/// Intermediate recombination.
///
/// Identical to [`LineRecombination`] except that the coefficient pair is
/// redrawn independently for every gene, so offspring are free to leave the
/// line between the parents.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct IntermediateRecombination {
    p: f64,
}

impl IntermediateRecombination {
    /// Creates an intermediate recombination with blend range `[-p, 1 + p]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `p <= 0`.
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self { p: validate_p(p)? })
    }
}

impl Default for IntermediateRecombination {
    fn default() -> Self {
        // Safe to unwrap because the default parameter is valid
        Self::new(0.25).unwrap()
    }
}

impl CrossoverStrategy for IntermediateRecombination {
    fn cross(
        &self,
        mut parent_a: Individual,
        mut parent_b: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        check_dimensions(&parent_a, &parent_b)?;

        for i in 0..parent_a.position.len() {
            let a = rng.gen_range(-self.p..1.0 + self.p);
            let b = rng.gen_range(-self.p..1.0 + self.p);
            blend_gene(&mut parent_a, &mut parent_b, i, a, b);
        }

        Ok((parent_a, parent_b))
    }
}
