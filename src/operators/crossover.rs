//! Crossover operators
//!
//! Recombination of two parent genomes into two offspring.

use rand::Rng;

use crate::error::{EvoResult, EvolutionError};
use crate::genome::Genome;
use crate::operators::traits::CrossoverOperator;

/// Single-point crossover
///
/// Picks one cut point `p` uniformly from `[1, len - 1]` and splices the
/// parents into complementary offspring: `a[..p] + b[p..]` and
/// `b[..p] + a[p..]`. Genomes shorter than 2 bits have no interior cut point
/// and are returned unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Create a new single-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn crossover<R: Rng>(
        &self,
        a: &Genome,
        b: &Genome,
        rng: &mut R,
    ) -> EvoResult<(Genome, Genome)> {
        if a.len() != b.len() {
            return Err(EvolutionError::LengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }

        let length = a.len();
        if length < 2 {
            return Ok((a.clone(), b.clone()));
        }

        let point = rng.gen_range(1..length);
        Ok((a.splice(b, point), b.splice(a, point)))
    }
}
